//! Reusable UI component configuration.

pub mod listing;

pub use listing::{
    ActionEffect, CellKind, FilterKind, ListingAction, ListingColumn, ListingConfig,
    ListingFilter, VisibilityRule,
};
