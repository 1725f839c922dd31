//! GoodFood Core - Shared types library.
//!
//! This crate provides common types used across GoodFood components:
//! - `admin` - Moderation panel for platform operators
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Roles, account statuses, and the normalized listing envelope

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
