//! Restaurants listing page.

use axum::extract::{Query, State};
use tracing::instrument;

use crate::{
    components::listing::restaurants_listing,
    middleware::RequireAuth,
    state::AppState,
    upstream::{ListQuery, types::Restaurant},
};

use super::listing::{CellView, ListingTemplate, RowView};

fn row(restaurant: &Restaurant) -> RowView {
    let image = restaurant
        .main_image()
        .map_or_else(String::new, |path| format!("/api/proxy/uploads/{path}"));
    let rating = restaurant
        .average_rating
        .map_or_else(String::new, |r| format!("{r:.0}"));

    RowView {
        id: restaurant.id,
        status: restaurant.status,
        cells: vec![
            CellView::image(image),
            CellView::text(restaurant.name.as_str()),
            CellView::text(restaurant.address()),
            CellView::text(
                restaurant
                    .restaurant_type
                    .as_ref()
                    .map_or("", |t| t.name.as_str()),
            ),
            CellView::rating(rating),
            CellView::status_badge(restaurant.status),
        ],
    }
}

/// Restaurants listing page handler.
#[instrument(skip(token, state))]
pub async fn index(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ListingTemplate {
    let page = match state
        .backend()
        .list_restaurants::<Restaurant>(&token, &query)
        .await
    {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Failed to fetch restaurants: {e}");
            goodfood_core::Page::empty()
        }
    };

    ListingTemplate::new(
        restaurants_listing(),
        "/restaurants",
        page.data.iter().map(row).collect(),
        page.pagination,
        &query,
    )
}
