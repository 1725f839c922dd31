//! HTTP middleware stack for the admin panel.
//!
//! # Layers (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, outermost)
//! 2. `TraceLayer` (request tracing)
//! 3. Route guard (page routes only - redirects unauthenticated, suspended,
//!    and must-change-password callers before any page renders)
//!
//! API routes skip the guard; they authorize through the extractors in
//! [`auth`] instead.

pub mod auth;
pub mod cookies;
pub mod guard;

pub use auth::{RequireAuth, RequireSuperAdmin};
pub use guard::route_guard;
