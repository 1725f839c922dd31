//! Listing component configuration.
//!
//! Every moderation screen (users, restaurants, reviews, orders) is the same
//! askama template driven by one of these configurations. The configuration
//! is pure data: columns pick a rendering strategy by [`CellKind`], actions
//! describe their HTTP effect as method + URL template, and visibility is a
//! serializable rule rather than a closure, so the whole config can also be
//! handed to the client-side action layer as JSON.

use serde::{Deserialize, Serialize};

use goodfood_core::AccountStatus;

/// Rendering strategy for a listing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// Plain text.
    Text,
    /// Colored status badge.
    StatusBadge,
    /// Money amount, rendered with the euro sign.
    Price,
    /// Star rating out of five.
    Rating,
    /// Date, displayed as received from the backend.
    Date,
    /// Thumbnail image served through the uploads proxy.
    Image,
}

/// Column definition for a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Rendering strategy.
    pub cell: CellKind,
    /// Whether the column is sortable.
    pub sortable: bool,
}

impl ListingColumn {
    /// Create a plain text column.
    #[must_use]
    pub fn text(key: &str, label: &str) -> Self {
        Self::new(key, label, CellKind::Text)
    }

    /// Create a column with an explicit cell kind.
    #[must_use]
    pub fn new(key: &str, label: &str, cell: CellKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            cell,
            sortable: false,
        }
    }

    /// Mark the column sortable.
    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// When a row action is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "status", rename_all = "snake_case")]
pub enum VisibilityRule {
    /// Always visible.
    Always,
    /// Visible only when the row status matches.
    StatusIs(AccountStatus),
    /// Visible only when the row status differs.
    StatusIsNot(AccountStatus),
}

impl VisibilityRule {
    /// Evaluate the rule against a row's status.
    #[must_use]
    pub fn allows(&self, status: AccountStatus) -> bool {
        match self {
            Self::Always => true,
            Self::StatusIs(wanted) => status == *wanted,
            Self::StatusIsNot(unwanted) => status != *unwanted,
        }
    }
}

/// The HTTP call an action performs, via the proxy API.
///
/// `url_template` contains a literal `{id}` placeholder substituted
/// client-side with the row identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionEffect {
    /// HTTP method (GET, PATCH, DELETE, ...).
    pub method: String,
    /// Proxy URL with an `{id}` placeholder.
    pub url_template: String,
}

impl ActionEffect {
    /// Create a new effect.
    #[must_use]
    pub fn new(method: &str, url_template: &str) -> Self {
        Self {
            method: method.to_string(),
            url_template: url_template.to_string(),
        }
    }
}

/// Visual weight of an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStyle {
    Neutral,
    Warning,
    Danger,
}

/// A per-row action button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingAction {
    /// Stable identifier, doubles as the `data-action` attribute.
    pub id: String,
    /// Button label.
    pub label: String,
    /// Visual style.
    pub style: ActionStyle,
    /// When the button is rendered for a row.
    pub visible_when: VisibilityRule,
    /// Whether the client asks for confirmation before firing.
    pub requires_confirmation: bool,
    /// Confirmation prompt, when required.
    pub confirmation_message: Option<String>,
    /// The HTTP call to perform.
    pub effect: ActionEffect,
}

impl ListingAction {
    /// Create an always-visible action.
    #[must_use]
    pub fn new(id: &str, label: &str, effect: ActionEffect) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            style: ActionStyle::Neutral,
            visible_when: VisibilityRule::Always,
            requires_confirmation: false,
            confirmation_message: None,
            effect,
        }
    }

    /// Restrict visibility.
    #[must_use]
    pub fn visible_when(mut self, rule: VisibilityRule) -> Self {
        self.visible_when = rule;
        self
    }

    /// Require a confirmation dialog with the given prompt.
    #[must_use]
    pub fn confirm(mut self, message: &str) -> Self {
        self.requires_confirmation = true;
        self.confirmation_message = Some(message.to_string());
        self
    }

    /// Set the visual style.
    #[must_use]
    pub const fn style(mut self, style: ActionStyle) -> Self {
        self.style = style;
        self
    }

    /// CSS class for the button style.
    #[must_use]
    pub const fn style_class(&self) -> &'static str {
        match self.style {
            ActionStyle::Neutral => "action-neutral",
            ActionStyle::Warning => "action-warning",
            ActionStyle::Danger => "action-danger",
        }
    }
}

/// Filter input kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "options", rename_all = "snake_case")]
pub enum FilterKind {
    /// Free text input.
    Input,
    /// Single-select dropdown of (value, label) pairs.
    Select(Vec<(String, String)>),
    /// Date picker.
    Date,
}

/// Filter definition for a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingFilter {
    /// Query parameter key forwarded to the backend.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Input kind.
    pub kind: FilterKind,
}

impl ListingFilter {
    /// Create a select filter.
    #[must_use]
    pub fn select(key: &str, label: &str, options: &[(&str, &str)]) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: FilterKind::Select(
                options
                    .iter()
                    .map(|(v, l)| ((*v).to_string(), (*l).to_string()))
                    .collect(),
            ),
        }
    }

    /// Create a free text filter.
    #[must_use]
    pub fn input(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind: FilterKind::Input,
        }
    }
}

/// Available presentation modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    List,
    Card,
}

/// Configuration for one moderation listing screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Unique listing identifier (also the page slug).
    pub listing_id: String,
    /// Page title.
    pub title: String,
    /// Column definitions.
    pub columns: Vec<ListingColumn>,
    /// Per-row actions.
    pub actions: Vec<ListingAction>,
    /// Filter definitions.
    pub filters: Vec<ListingFilter>,
    /// Whether free-text search is shown.
    pub searchable: bool,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Whether pagination controls are shown.
    pub paginated: bool,
    /// Default page size.
    pub page_size: u32,
    /// Available view modes (list first is the default).
    pub view_modes: Vec<ViewMode>,
    /// Empty state title.
    pub empty_title: String,
}

impl ListingConfig {
    /// Create a listing configuration with list view, search, and pagination.
    #[must_use]
    pub fn new(listing_id: &str, title: &str) -> Self {
        Self {
            listing_id: listing_id.to_string(),
            title: title.to_string(),
            columns: vec![],
            actions: vec![],
            filters: vec![],
            searchable: true,
            search_placeholder: "Rechercher...".to_string(),
            paginated: true,
            page_size: 10,
            view_modes: vec![ViewMode::List],
            empty_title: "Aucun résultat".to_string(),
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: ListingColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Add an action.
    #[must_use]
    pub fn action(mut self, action: ListingAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Add a filter.
    #[must_use]
    pub fn filter(mut self, filter: ListingFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Enable the card view in addition to the list view.
    #[must_use]
    pub fn with_card_view(mut self) -> Self {
        self.view_modes.push(ViewMode::Card);
        self
    }

    /// Set the search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set the empty state title.
    #[must_use]
    pub fn empty_title(mut self, title: &str) -> Self {
        self.empty_title = title.to_string();
        self
    }

    /// The actions visible for a row with the given status.
    #[must_use]
    pub fn actions_for(&self, status: &AccountStatus) -> Vec<&ListingAction> {
        self.actions
            .iter()
            .filter(|a| a.visible_when.allows(*status))
            .collect()
    }

    /// Whether the card view is offered alongside the list view.
    #[must_use]
    pub fn has_card_view(&self) -> bool {
        self.view_modes.contains(&ViewMode::Card)
    }
}

/// Shared suspend/restore action pair for account-like rows.
///
/// Restore is only offered on suspended rows; suspend only on rows that are
/// not already suspended.
fn moderation_actions(suspend_url: &str, restore_url: &str) -> [ListingAction; 2] {
    [
        ListingAction::new("suspend", "Suspendre", ActionEffect::new("PATCH", suspend_url))
            .style(ActionStyle::Warning)
            .visible_when(VisibilityRule::StatusIsNot(AccountStatus::Suspended))
            .confirm("Confirmer la suspension ?"),
        ListingAction::new("restore", "Restaurer", ActionEffect::new("PATCH", restore_url))
            .visible_when(VisibilityRule::StatusIs(AccountStatus::Suspended))
            .confirm("Confirmer la restauration ?"),
    ]
}

const STATUS_FILTER: &[(&str, &str)] = &[
    ("active", "Actif"),
    ("suspended", "Suspendu"),
    ("inactive", "Inactif"),
];

/// Build the platform users listing configuration.
#[must_use]
pub fn users_listing() -> ListingConfig {
    let [suspend, restore] = moderation_actions(
        "/api/proxy/users/{id}/suspend",
        "/api/proxy/users/{id}/restore",
    );
    ListingConfig::new("users", "Utilisateurs")
        .column(ListingColumn::text("name", "Nom").sortable())
        .column(ListingColumn::text("email", "Email"))
        .column(ListingColumn::text("role", "Rôle"))
        .column(ListingColumn::new("status", "Statut", CellKind::StatusBadge))
        .column(ListingColumn::new("created_at", "Inscription", CellKind::Date).sortable())
        .filter(ListingFilter::select("status", "Statut", STATUS_FILTER))
        .action(suspend)
        .action(restore)
        .search_placeholder("Rechercher par nom ou email...")
        .empty_title("Aucun utilisateur trouvé")
}

/// Build the restaurants listing configuration.
#[must_use]
pub fn restaurants_listing() -> ListingConfig {
    ListingConfig::new("restaurants", "Restaurants")
        .column(ListingColumn::new("image", "", CellKind::Image))
        .column(ListingColumn::text("name", "Nom").sortable())
        .column(ListingColumn::text("address", "Adresse"))
        .column(ListingColumn::text("type", "Type"))
        .column(ListingColumn::new("rating", "Note", CellKind::Rating))
        .column(ListingColumn::new("status", "Statut", CellKind::StatusBadge))
        .filter(ListingFilter::select("status", "Statut", STATUS_FILTER))
        .with_card_view()
        .search_placeholder("Rechercher un restaurant...")
        .empty_title("Aucun restaurant trouvé")
}

/// Build the reviews listing configuration.
#[must_use]
pub fn reviews_listing() -> ListingConfig {
    // The backend offers no restore for reviews; moderation is suspend or
    // delete only.
    let suspend = ListingAction::new(
        "suspend",
        "Suspendre",
        ActionEffect::new("PATCH", "/api/proxy/reviews/{id}/suspend"),
    )
    .style(ActionStyle::Warning)
    .visible_when(VisibilityRule::StatusIsNot(AccountStatus::Suspended))
    .confirm("Confirmer la suspension ?");

    ListingConfig::new("reviews", "Avis clients")
        .column(ListingColumn::text("restaurant", "Restaurant"))
        .column(ListingColumn::text("client", "Client"))
        .column(ListingColumn::new("rating", "Note", CellKind::Rating).sortable())
        .column(ListingColumn::text("review", "Avis"))
        .column(ListingColumn::new("status", "Statut", CellKind::StatusBadge))
        .column(ListingColumn::new("created_at", "Date", CellKind::Date).sortable())
        .filter(ListingFilter::select("status", "Statut", STATUS_FILTER))
        .action(suspend)
        .action(
            ListingAction::new(
                "delete",
                "Supprimer",
                ActionEffect::new("DELETE", "/api/proxy/reviews/{id}"),
            )
            .style(ActionStyle::Danger)
            .confirm("Supprimer définitivement cet avis ?"),
        )
        .search_placeholder("Rechercher dans les avis...")
        .empty_title("Aucun avis trouvé")
}

/// Build the orders listing configuration.
///
/// Orders are read-only in the panel: no actions, no mutation surface.
#[must_use]
pub fn orders_listing() -> ListingConfig {
    ListingConfig::new("orders", "Commandes")
        .column(ListingColumn::text("id", "N°").sortable())
        .column(ListingColumn::text("restaurant", "Restaurant"))
        .column(ListingColumn::text("client", "Client"))
        .column(ListingColumn::new("total", "Total", CellKind::Price).sortable())
        .column(ListingColumn::new("status", "Statut", CellKind::StatusBadge))
        .column(ListingColumn::new("created_at", "Date", CellKind::Date).sortable())
        .filter(ListingFilter::input("status", "Statut"))
        .search_placeholder("Rechercher une commande...")
        .empty_title("Aucune commande trouvée")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_visible_only_when_suspended() {
        let config = users_listing();

        let suspended: Vec<&str> = config
            .actions_for(&AccountStatus::Suspended)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(suspended, vec!["restore"]);

        let active: Vec<&str> = config
            .actions_for(&AccountStatus::Active)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(active, vec!["suspend"]);
    }

    #[test]
    fn test_visibility_rules() {
        assert!(VisibilityRule::Always.allows(AccountStatus::Active));
        assert!(VisibilityRule::StatusIs(AccountStatus::Suspended).allows(AccountStatus::Suspended));
        assert!(!VisibilityRule::StatusIs(AccountStatus::Suspended).allows(AccountStatus::Active));
        assert!(
            VisibilityRule::StatusIsNot(AccountStatus::Suspended).allows(AccountStatus::Inactive)
        );
    }

    #[test]
    fn test_moderation_actions_confirm() {
        let config = reviews_listing();
        let delete = config.actions.iter().find(|a| a.id == "delete").unwrap();
        assert!(delete.requires_confirmation);
        assert_eq!(delete.effect.method, "DELETE");
        assert_eq!(delete.effect.url_template, "/api/proxy/reviews/{id}");
    }

    #[test]
    fn test_orders_listing_is_read_only() {
        assert!(orders_listing().actions.is_empty());
    }

    #[test]
    fn test_card_view_is_opt_in() {
        assert!(restaurants_listing().has_card_view());
        assert!(!users_listing().has_card_view());
    }

    #[test]
    fn test_config_serializes_for_client() {
        let json = serde_json::to_value(users_listing()).unwrap();
        assert_eq!(json["listing_id"], "users");
        let restore = json["actions"]
            .as_array()
            .unwrap()
            .iter()
            .find(|a| a["id"] == "restore")
            .unwrap();
        assert_eq!(restore["visible_when"]["rule"], "status_is");
        assert_eq!(restore["visible_when"]["status"], "suspended");
    }
}
