//! Backend envelope normalization.
//!
//! The backend wraps list responses in three different shapes depending on
//! the endpoint:
//!
//! - nested: `{statusCode, data: {users: [...], meta: {totalItems, ...}}}`
//! - pre-normalized: `{data: [...], pagination: {page, ...}}`
//! - bare: `[...]`
//!
//! [`RawEnvelope`] models the union explicitly and [`RawEnvelope::normalize`]
//! collapses all three into [`Page`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use goodfood_core::{Page, Pagination};

/// Query parameters accepted by every listing endpoint.
///
/// Unknown parameters are captured in `extra` and forwarded to the backend
/// untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// Requested page, kept as a string exactly as it arrived in the URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Requested page size, kept as a string exactly as it arrived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ListQuery {
    /// The requested page number, defaulting to 1.
    #[must_use]
    pub fn page_number(&self) -> u32 {
        self.page.as_deref().and_then(|p| p.parse().ok()).unwrap_or(1)
    }

    /// The requested page size, defaulting to 10.
    #[must_use]
    pub fn page_limit(&self) -> u32 {
        self.limit.as_deref().and_then(|l| l.parse().ok()).unwrap_or(10)
    }

    /// Pagination synthesized from the requested page/limit, for responses
    /// that carry no metadata of their own.
    fn synthesized_pagination(&self, total: usize) -> Pagination {
        Pagination {
            page: self.page_number(),
            limit: self.page_limit(),
            total: total as u64,
            total_pages: 1,
        }
    }
}

/// Pagination metadata in the backend's nested shape.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedMeta {
    pub total_items: Option<u64>,
    pub current_page: Option<u32>,
    pub items_per_page: Option<u32>,
    pub total_pages: Option<u32>,
}

impl From<NestedMeta> for Pagination {
    fn from(meta: NestedMeta) -> Self {
        Self {
            page: meta.current_page.unwrap_or(1),
            limit: meta.items_per_page.unwrap_or(10),
            total: meta.total_items.unwrap_or(0),
            total_pages: meta.total_pages.unwrap_or(1),
        }
    }
}

/// The entity array inside a nested envelope.
///
/// The backend keys the array by entity name; the aliases cover every
/// listing endpoint the panel consumes.
#[derive(Debug, Deserialize)]
pub struct NestedData<T> {
    #[serde(
        alias = "users",
        alias = "restaurants",
        alias = "reviews",
        alias = "orders",
        alias = "items"
    )]
    pub items: Vec<T>,
    #[serde(default)]
    pub meta: Option<NestedMeta>,
}

/// The three list-response shapes the backend produces.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawEnvelope<T> {
    /// `{data: [...], pagination: {...}?}`
    Paginated {
        data: Vec<T>,
        #[serde(default)]
        pagination: Option<Pagination>,
    },
    /// `{statusCode, data: {<entity>: [...], meta: {...}}}`
    Nested { data: NestedData<T> },
    /// A bare JSON array.
    Bare(Vec<T>),
}

impl<T> RawEnvelope<T> {
    /// Collapse any backend shape into the uniform [`Page`] envelope.
    ///
    /// Shapes without pagination metadata synthesize it from the requested
    /// page/limit with `total` equal to the array length.
    #[must_use]
    pub fn normalize(self, query: &ListQuery) -> Page<T> {
        match self {
            Self::Paginated { data, pagination } => {
                let pagination =
                    pagination.unwrap_or_else(|| query.synthesized_pagination(data.len()));
                Page { data, pagination }
            }
            Self::Nested { data } => Page {
                pagination: data.meta.unwrap_or_default().into(),
                data: data.items,
            },
            Self::Bare(data) => {
                let pagination = query.synthesized_pagination(data.len());
                Page { data, pagination }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn parse(value: Value) -> RawEnvelope<Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_nested_envelope_normalizes_meta() {
        let envelope = parse(json!({
            "statusCode": 200,
            "message": "OK",
            "data": {
                "users": [{"id": 1}, {"id": 2}],
                "meta": {
                    "totalItems": 2,
                    "currentPage": 1,
                    "itemsPerPage": 10,
                    "totalPages": 1
                }
            }
        }));

        let page = envelope.normalize(&ListQuery::default());
        assert_eq!(page.data, vec![json!({"id": 1}), json!({"id": 2})]);
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.limit, 10);
        assert_eq!(page.pagination.total, 2);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_bare_array_synthesizes_pagination() {
        let envelope = parse(json!([{"id": 1}, {"id": 2}, {"id": 3}]));

        let query = ListQuery {
            page: Some("2".to_string()),
            limit: Some("25".to_string()),
            ..ListQuery::default()
        };
        let page = envelope.normalize(&query);
        assert_eq!(page.data.len(), 3);
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.limit, 25);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_pre_normalized_envelope_passes_through() {
        let envelope = parse(json!({
            "data": [{"id": 7}],
            "pagination": {"page": 3, "limit": 5, "total": 11, "totalPages": 3}
        }));

        let page = envelope.normalize(&ListQuery::default());
        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.pagination.limit, 5);
        assert_eq!(page.pagination.total, 11);
        assert_eq!(page.pagination.total_pages, 3);
    }

    #[test]
    fn test_data_array_without_pagination_synthesizes() {
        let envelope = parse(json!({"data": [{"id": 1}]}));

        let page = envelope.normalize(&ListQuery::default());
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.limit, 10);
        assert_eq!(page.pagination.total, 1);
    }

    #[test]
    fn test_nested_meta_defaults_when_missing() {
        let envelope = parse(json!({
            "statusCode": 200,
            "data": {"reviews": [{"id": 4}]}
        }));

        let page = envelope.normalize(&ListQuery::default());
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.pagination.page, 1);
        assert_eq!(page.pagination.total, 0);
    }

    #[test]
    fn test_list_query_extra_params_roundtrip() {
        let query: ListQuery =
            serde_json::from_value(json!({"page": "2", "restaurantId": "9"})).unwrap();
        assert_eq!(query.page_number(), 2);
        assert_eq!(query.extra.get("restaurantId").map(String::as_str), Some("9"));
    }
}
