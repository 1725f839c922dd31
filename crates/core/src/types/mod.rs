//! Core types for GoodFood.
//!
//! This module provides shared domain concepts used by every component that
//! talks to the platform backend.

pub mod page;
pub mod role;
pub mod status;

pub use page::{Page, Pagination};
pub use role::{Role, RoleParseError};
pub use status::AccountStatus;
