//! Restaurant resource types.

use serde::{Deserialize, Serialize};

use goodfood_core::AccountStatus;

/// A restaurant category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantType {
    pub id: i64,
    pub name: String,
}

/// An uploaded restaurant image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantImage {
    pub id: i64,
    /// Path relative to the backend uploads endpoint.
    pub path: String,
    /// Whether this is the restaurant's cover image.
    #[serde(rename = "isMain", default)]
    pub is_main: bool,
}

/// A restaurant as returned by the restaurant listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Address fields, stored denormalized by the backend.
    #[serde(default)]
    pub street_number: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Whether the restaurant currently accepts orders.
    #[serde(default)]
    pub is_open: bool,
    /// Backend-owned lifecycle status (transitions triggered, never decided,
    /// from the panel).
    #[serde(default)]
    pub status: AccountStatus,
    #[serde(rename = "restaurantType", default)]
    pub restaurant_type: Option<RestaurantType>,
    #[serde(default)]
    pub images: Vec<RestaurantImage>,
    /// Review aggregates computed by the backend.
    #[serde(default)]
    pub review_count: Option<i64>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub created_at: String,
}

impl Restaurant {
    /// One-line postal address for table cells.
    #[must_use]
    pub fn address(&self) -> String {
        let parts: Vec<&str> = [
            self.street_number.as_deref(),
            self.street.as_deref(),
            self.city.as_deref(),
            self.postal_code.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect();
        parts.join(" ")
    }

    /// The cover image path, preferring the one flagged as main.
    #[must_use]
    pub fn main_image(&self) -> Option<&str> {
        self.images
            .iter()
            .find(|i| i.is_main)
            .or_else(|| self.images.first())
            .map(|i| i.path.as_str())
    }
}
