//! Platform users listing page.

use axum::extract::{Query, State};
use tracing::instrument;

use crate::{
    components::listing::users_listing,
    middleware::RequireAuth,
    state::AppState,
    upstream::{ListQuery, types::User},
};

use super::listing::{CellView, ListingTemplate, RowView};

fn row(user: &User) -> RowView {
    RowView {
        id: user.id,
        status: user.status,
        cells: vec![
            CellView::text(user.display_name()),
            CellView::text(user.email.as_str()),
            CellView::text(
                user.role
                    .map_or_else(|| "client".to_string(), |r| r.to_string()),
            ),
            CellView::status_badge(user.status),
            CellView::date(user.created_at.as_str()),
        ],
    }
}

/// Users listing page handler.
#[instrument(skip(token, state))]
pub async fn index(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ListingTemplate {
    let page = match state.backend().list_users::<User>(&token, &query).await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Failed to fetch users: {e}");
            goodfood_core::Page::empty()
        }
    };

    ListingTemplate::new(
        users_listing(),
        "/users",
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
    fn test_row_renders_user_fields() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "email": "jean@goodfood.example",
            "first_name": "Jean",
            "last_name": "Dupont",
            "status": "suspended",
            "role": "admin",
            "created_at": "2024-02-01"
        }))
        .unwrap();

        let row = row(&user);
        assert_eq!(row.id, 7);
        assert_eq!(row.cells[0].value, "Jean Dupont");
        assert_eq!(row.cells[3].value, "Suspendu");
    }
}
