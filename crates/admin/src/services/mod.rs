//! Business services for the admin panel.

pub mod session;

pub use session::{SessionCache, SessionState, resolve_session};
