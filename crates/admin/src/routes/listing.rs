//! Shared listing page scaffolding.
//!
//! Every moderation screen renders the same template from a
//! [`ListingConfig`] plus pre-rendered rows. Entity route modules build the
//! rows; everything here is entity-agnostic.

use askama::Template;
use askama_web::WebTemplate;

use goodfood_core::{AccountStatus, Pagination};

use crate::components::{FilterKind, ListingAction, ListingConfig};
use crate::filters;
use crate::upstream::ListQuery;

/// One pre-rendered cell.
///
/// `kind` mirrors [`crate::components::CellKind`] as the template-facing
/// string the listing template switches on.
#[derive(Debug, Clone)]
pub struct CellView {
    pub kind: &'static str,
    pub value: String,
    /// CSS class, used by badge cells.
    pub class: String,
}

impl CellView {
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: "text",
            value: value.into(),
            class: String::new(),
        }
    }

    #[must_use]
    pub fn date(value: impl Into<String>) -> Self {
        Self {
            kind: "date",
            value: value.into(),
            class: String::new(),
        }
    }

    #[must_use]
    pub fn price(value: impl Into<String>) -> Self {
        Self {
            kind: "price",
            value: filters::format_euro(&value.into()),
            class: String::new(),
        }
    }

    #[must_use]
    pub fn rating(value: impl Into<String>) -> Self {
        Self {
            kind: "rating",
            value: filters::format_stars(&value.into()),
            class: String::new(),
        }
    }

    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: "image",
            value: url.into(),
            class: String::new(),
        }
    }

    /// A status badge with an explicit label and CSS class.
    #[must_use]
    pub fn badge(label: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            kind: "badge",
            value: label.into(),
            class: class.into(),
        }
    }

    /// The standard badge for an account status.
    #[must_use]
    pub fn status_badge(status: AccountStatus) -> Self {
        Self::badge(status_label(status), status_class(status))
    }
}

/// French display label for an account status.
#[must_use]
pub const fn status_label(status: AccountStatus) -> &'static str {
    match status {
        AccountStatus::Active => "Actif",
        AccountStatus::Suspended => "Suspendu",
        AccountStatus::Inactive => "Inactif",
    }
}

/// Badge CSS class for an account status.
#[must_use]
pub const fn status_class(status: AccountStatus) -> &'static str {
    match status {
        AccountStatus::Active => "badge-active",
        AccountStatus::Suspended => "badge-suspended",
        AccountStatus::Inactive => "badge-inactive",
    }
}

/// One pre-rendered row.
#[derive(Debug, Clone)]
pub struct RowView {
    pub id: i64,
    /// Drives action visibility.
    pub status: AccountStatus,
    pub cells: Vec<CellView>,
}

impl RowView {
    /// Resolve an action's URL template against this row.
    #[must_use]
    pub fn url_for(&self, action: &ListingAction) -> String {
        action.effect.url_template.replace("{id}", &self.id.to_string())
    }
}

/// The listing page template, shared by all moderation screens.
#[derive(Template, WebTemplate)]
#[template(path = "listing.html")]
pub struct ListingTemplate {
    pub config: ListingConfig,
    pub current_path: String,
    pub rows: Vec<RowView>,
    pub pagination: Pagination,
    /// Echo of the search box content.
    pub search: Option<String>,
    /// Active filter values, keyed by filter key.
    pub filter_values: Vec<(String, String)>,
}

impl ListingTemplate {
    /// Assemble the page from its parts.
    ///
    /// The active filter values are lifted out of `query` for the filters the
    /// configuration declares, so both the form echo and the pagination links
    /// carry them.
    #[must_use]
    pub fn new(
        config: ListingConfig,
        current_path: &str,
        rows: Vec<RowView>,
        pagination: Pagination,
        query: &ListQuery,
    ) -> Self {
        let filter_values = config
            .filters
            .iter()
            .filter_map(|filter| {
                let value = match filter.key.as_str() {
                    "status" => query.status.clone(),
                    key => query.extra.get(key).cloned(),
                };
                value
                    .filter(|v| !v.is_empty())
                    .map(|v| (filter.key.clone(), v))
            })
            .collect();

        Self {
            config,
            current_path: current_path.to_string(),
            rows,
            pagination,
            search: query.search.clone(),
            filter_values,
        }
    }

    /// The active value for a filter key, or the empty string.
    #[must_use]
    pub fn filter_value(&self, key: &str) -> &str {
        self.filter_values
            .iter()
            .find(|(k, _)| k == key)
            .map_or("", |(_, v)| v.as_str())
    }

    /// Link to another page of the same listing, keeping the active search
    /// and filter parameters.
    #[must_use]
    pub fn page_href(&self, page: u32) -> String {
        let mut href = format!("{}?page={page}", self.current_path);
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            href.push_str("&search=");
            href.push_str(&urlencoding::encode(search));
        }
        for (key, value) in &self.filter_values {
            href.push('&');
            href.push_str(key);
            href.push('=');
            href.push_str(&urlencoding::encode(value));
        }
        href
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::components::{ActionEffect, ListingAction};

    #[test]
    fn test_url_template_substitution() {
        let action = ListingAction::new(
            "restore",
            "Restaurer",
            ActionEffect::new("PATCH", "/api/proxy/users/{id}/restore"),
        );
        let row = RowView {
            id: 42,
            status: AccountStatus::Suspended,
            cells: vec![],
        };
        assert_eq!(row.url_for(&action), "/api/proxy/users/42/restore");
    }

    #[test]
    fn test_status_badge_labels_are_french() {
        let badge = CellView::status_badge(AccountStatus::Suspended);
        assert_eq!(badge.value, "Suspendu");
        assert_eq!(badge.class, "badge-suspended");
    }

    #[test]
    fn test_price_cell_renders_euro() {
        assert_eq!(CellView::price("13.00").value, "13.00 €");
    }

    fn filtered_query() -> ListQuery {
        ListQuery {
            search: Some("pizza".to_string()),
            status: Some("suspended".to_string()),
            ..ListQuery::default()
        }
    }

    fn page_two() -> Pagination {
        Pagination {
            page: 2,
            limit: 10,
            total: 30,
            total_pages: 3,
        }
    }

    #[test]
    fn test_page_links_keep_search_and_filters() {
        let template = ListingTemplate::new(
            crate::components::listing::users_listing(),
            "/users",
            vec![],
            page_two(),
            &filtered_query(),
        );
        assert_eq!(
            template.page_href(3),
            "/users?page=3&search=pizza&status=suspended"
        );
        assert_eq!(template.filter_value("status"), "suspended");
        assert_eq!(template.filter_value("missing"), "");
    }

    #[test]
    fn test_rendered_listing_echoes_state_and_row_actions() {
        let row = RowView {
            id: 9,
            status: AccountStatus::Suspended,
            cells: vec![CellView::text("Jean Dupont")],
        };
        let html = ListingTemplate::new(
            crate::components::listing::users_listing(),
            "/users",
            vec![row],
            page_two(),
            &filtered_query(),
        )
        .render()
        .unwrap();

        // Suspended rows offer restore, not suspend.
        assert!(html.contains(r#"data-url="/api/proxy/users/9/restore""#));
        assert!(!html.contains(r#"data-url="/api/proxy/users/9/suspend""#));
        // The active filter is reselected and survives paging.
        assert!(html.contains(r#"<option value="suspended" selected>"#));
        assert!(html.contains("page=3&amp;search=pizza&amp;status=suspended"));
        assert!(html.contains("page=1&amp;search=pizza&amp;status=suspended"));
    }

    #[test]
    fn test_card_view_renders_only_when_configured() {
        let row = RowView {
            id: 3,
            status: AccountStatus::Active,
            cells: vec![
                CellView::image("/api/proxy/uploads/covers/3.jpg"),
                CellView::text("Chez Nous"),
            ],
        };
        let html = ListingTemplate::new(
            crate::components::listing::restaurants_listing(),
            "/restaurants",
            vec![row],
            Pagination::default(),
            &ListQuery::default(),
        )
        .render()
        .unwrap();
        assert!(html.contains("card-grid"));
        assert!(html.contains(r#"data-view="card""#));
        assert!(html.contains(r#"<img class="card-cover" src="/api/proxy/uploads/covers/3.jpg""#));

        let html = ListingTemplate::new(
            crate::components::listing::users_listing(),
            "/users",
            vec![],
            Pagination::default(),
            &ListQuery::default(),
        )
        .render()
        .unwrap();
        assert!(!html.contains("card-grid"));
    }
}
