//! Typed representations of backend resources.
//!
//! These are pass-through types: the backend owns their lifecycle, the admin
//! panel only displays them and relays mutations. Fields the panel never
//! reads are omitted; the proxy API relays raw JSON and is unaffected.

pub mod order;
pub mod restaurant;
pub mod review;
pub mod user;

pub use order::{Order, OrderItem, OrderStatus};
pub use restaurant::{Restaurant, RestaurantImage, RestaurantType};
pub use review::{Review, ReviewClient, ReviewRestaurant};
pub use user::User;
