//! Client review resource types.
//!
//! Reviews use camelCase field names on the wire, unlike the other
//! resources.

use serde::{Deserialize, Serialize};

use goodfood_core::AccountStatus;

/// Denormalized restaurant reference attached to a review at fetch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRestaurant {
    pub id: i64,
    pub name: String,
}

/// Denormalized client reference attached to a review at fetch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewClient {
    pub id: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// A client review of a restaurant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    /// Free-text review body.
    pub review: String,
    /// Rating from 1 to 5.
    pub rating: u8,
    #[serde(default)]
    pub status: AccountStatus,
    pub restaurant_id: i64,
    pub client_id: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub restaurant: Option<ReviewRestaurant>,
    #[serde(default)]
    pub client: Option<ReviewClient>,
}
