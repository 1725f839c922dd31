//! Client reviews listing page.

use axum::extract::{Query, State};
use tracing::instrument;

use crate::{
    components::listing::reviews_listing,
    middleware::RequireAuth,
    state::AppState,
    upstream::{ListQuery, types::Review},
};

use super::listing::{CellView, ListingTemplate, RowView};

/// Review bodies are truncated in table cells.
const EXCERPT_LEN: usize = 120;

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_LEN {
        return text.to_string();
    }
    let cut: String = text.chars().take(EXCERPT_LEN).collect();
    format!("{cut}…")
}

fn row(review: &Review) -> RowView {
    let restaurant = review
        .restaurant
        .as_ref()
        .map_or_else(|| format!("#{}", review.restaurant_id), |r| r.name.clone());
    let client = review.client.as_ref().map_or_else(
        || format!("#{}", review.client_id),
        |c| {
            c.email
                .clone()
                .unwrap_or_else(|| format!("#{}", c.id))
        },
    );

    RowView {
        id: review.id,
        status: review.status,
        cells: vec![
            CellView::text(restaurant),
            CellView::text(client),
            CellView::rating(review.rating.to_string()),
            CellView::text(excerpt(&review.review)),
            CellView::status_badge(review.status),
            CellView::date(review.created_at.as_str()),
        ],
    }
}

/// Reviews listing page handler.
#[instrument(skip(token, state))]
pub async fn index(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ListingTemplate {
    let page = match state.backend().list_reviews::<Review>(&token, &query).await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Failed to fetch reviews: {e}");
            goodfood_core::Page::empty()
        }
    };

    ListingTemplate::new(
        reviews_listing(),
        "/reviews",
        page.data.iter().map(row).collect(),
        page.pagination,
        &query,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_falls_back_to_ids_without_refs() {
        let review: Review = serde_json::from_value(json!({
            "id": 5,
            "review": "Très bon",
            "rating": 4,
            "restaurantId": 3,
            "clientId": 9
        }))
        .unwrap();

        let row = row(&review);
        assert_eq!(row.cells[0].value, "#3");
        assert_eq!(row.cells[1].value, "#9");
        assert_eq!(row.cells[2].value, "★★★★☆");
    }

    #[test]
    fn test_excerpt_truncates_long_bodies() {
        let long = "a".repeat(200);
        let short = excerpt(&long);
        assert_eq!(short.chars().count(), EXCERPT_LEN + 1);
        assert!(short.ends_with('…'));
    }
}
