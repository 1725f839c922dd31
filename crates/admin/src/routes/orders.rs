//! Orders listing page (read-only).

use axum::extract::{Query, State};
use tracing::instrument;

use goodfood_core::AccountStatus;

use crate::{
    components::listing::orders_listing,
    middleware::RequireAuth,
    state::AppState,
    upstream::{ListQuery, types::Order},
};

use super::listing::{CellView, ListingTemplate, RowView};

/// Badge class for an order status display name.
///
/// The backend names statuses in French with inconsistent casing and the
/// occasional stray whitespace, so the name is lowercased and trimmed before
/// matching. Unknown names fall back to a neutral badge.
fn status_class(name: &str) -> &'static str {
    match name.trim().to_lowercase().as_str() {
        "en attente"
        | "en attente de l'acceptation du restaurant"
        | "en attente de prise en charge par un livreur" => "badge-pending",
        "acceptée" | "acceptée par le restaurant" => "badge-accepted",
        "en préparation" | "en cours de préparation" => "badge-preparing",
        "prête" | "prête pour la livraison" => "badge-ready",
        "en livraison" | "en cours de livraison" => "badge-delivering",
        "livré" | "livrée" => "badge-delivered",
        "annulée" => "badge-cancelled",
        "refusée" => "badge-refused",
        _ => "badge-neutral",
    }
}

fn row(order: &Order) -> RowView {
    RowView {
        id: order.id,
        // Orders carry no account status and expose no actions.
        status: AccountStatus::Active,
        cells: vec![
            CellView::text(format!("#{}", order.id)),
            CellView::text(format!("#{}", order.restaurant_id)),
            CellView::text(format!("#{}", order.client_id)),
            CellView::price(order.total().to_string()),
            CellView::badge(order.status.name.as_str(), status_class(&order.status.name)),
            CellView::date(order.created_at.as_str()),
        ],
    }
}

/// Orders listing page handler.
#[instrument(skip(token, state))]
pub async fn index(
    RequireAuth(token): RequireAuth,
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ListingTemplate {
    let page = match state.backend().list_orders::<Order>(&token, &query).await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Failed to fetch orders: {e}");
            goodfood_core::Page::empty()
        }
    };

    ListingTemplate::new(
        orders_listing(),
        "/orders",
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

    fn order() -> Order {
        serde_json::from_value(json!({
            "id": 31,
            "client_id": 2,
            "restaurant_id": 3,
            "subtotal": "10.00",
            "delivery_costs": "2.50",
            "service_charge": "1.00",
            "global_discount": "0.50",
            "status": {"id": 4, "name": "livrée"},
            "created_at": "2024-03-01"
        }))
        .unwrap()
    }

    #[test]
    fn test_row_total_sums_fees_minus_discount() {
        let row = row(&order());
        assert_eq!(row.cells[3].value, "13.00 €");
    }

    #[test]
    fn test_status_class_mapping() {
        assert_eq!(status_class("livrée"), "badge-delivered");
        assert_eq!(status_class("annulée"), "badge-cancelled");
        assert_eq!(status_class("autre"), "badge-neutral");
    }

    #[test]
    fn test_status_class_normalizes_case_and_whitespace() {
        assert_eq!(status_class("En livraison"), "badge-delivering");
        assert_eq!(status_class(" Livrée "), "badge-delivered");
        assert_eq!(
            status_class("En attente de l'acceptation du restaurant"),
            "badge-pending"
        );
        assert_eq!(status_class("Prête pour la livraison"), "badge-ready");
        assert_eq!(status_class("Refusée"), "badge-refused");
    }
}
