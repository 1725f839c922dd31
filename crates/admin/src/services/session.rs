//! Session resolution.
//!
//! Sessions are never stored server-side: every protected request re-derives
//! the caller's state from the bearer token carried in the access cookie, via
//! the backend's status endpoint. The backend's status payload is
//! heterogeneous (the user record may sit at `user`, `data`, or `data.user`,
//! and suspension is signalled both by a structured status field and by a
//! French "suspendu" message); everything is collapsed here into one
//! structured [`SessionState`] so the rest of the panel checks enums only.

use serde_json::Value;
use sha2::{Digest, Sha256};

use goodfood_core::{AccountStatus, Role};

use crate::upstream::{BackendClient, UpstreamError};

/// Resolved caller state, recomputed per request.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Whether the backend accepted the bearer token.
    pub authenticated: bool,
    /// Caller role, when the status payload exposes one.
    pub role: Option<Role>,
    /// Structured account status (the only suspension signal downstream).
    pub status: AccountStatus,
    /// Whether the caller must change their password before proceeding.
    pub force_password_change: bool,
    /// The normalized user record, relayed as-is by the status proxy.
    pub user: Option<Value>,
    /// Human-readable backend message, if any.
    pub message: Option<String>,
}

impl SessionState {
    /// State for a request with no (or a rejected) credential.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self {
            authenticated: false,
            role: None,
            status: AccountStatus::Active,
            force_password_change: false,
            user: None,
            message: None,
        }
    }

    /// Whether the account is suspended (from either backend signal).
    #[must_use]
    pub const fn is_suspended(&self) -> bool {
        self.status.is_suspended()
    }

    /// Whether the caller holds the super-admin role.
    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        self.role.is_some_and(Role::is_super_admin)
    }
}

/// Whether a backend message carries the suspension marker.
///
/// The backend duplicates its suspension signal in localized message text;
/// this is the single place that string is examined.
fn message_signals_suspension(message: &str) -> bool {
    message.to_lowercase().contains("suspendu")
}

/// Locate the user record in a status payload.
///
/// Depending on the endpoint version the record sits at `user`, `data.user`,
/// or `data`.
fn extract_user(body: &Value) -> Option<&Value> {
    body.get("user")
        .filter(|u| u.is_object())
        .or_else(|| body.get("data").and_then(|d| d.get("user")).filter(|u| u.is_object()))
        .or_else(|| body.get("data").filter(|d| d.is_object()))
}

/// Collapse a successful status payload into a [`SessionState`].
fn normalize_status_payload(body: &Value) -> SessionState {
    let message = body.get("message").and_then(Value::as_str).map(String::from);
    let user = extract_user(body).cloned();

    let role = user
        .as_ref()
        .and_then(|u| u.get("role"))
        .and_then(Value::as_str)
        .and_then(|r| r.parse().ok());

    let status_field: Option<AccountStatus> = user
        .as_ref()
        .and_then(|u| u.get("status"))
        .cloned()
        .and_then(|s| serde_json::from_value(s).ok());

    let suspended = body.get("suspended").and_then(Value::as_bool) == Some(true)
        || status_field == Some(AccountStatus::Suspended)
        || message.as_deref().is_some_and(message_signals_suspension);

    let status = if suspended {
        AccountStatus::Suspended
    } else {
        status_field.unwrap_or_default()
    };

    let force_password_change = body
        .get("force_password_change")
        .or_else(|| body.get("data").and_then(|d| d.get("force_password_change")))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    SessionState {
        authenticated: !suspended,
        role,
        status,
        force_password_change,
        user,
        message,
    }
}

/// Resolve the caller's session from an optional bearer token.
///
/// No token short-circuits to unauthenticated with no network call. Backend
/// rejections that carry the suspension marker still surface as suspended so
/// the guard can route to the interstitial. Transport failures degrade to
/// unauthenticated with a generic message; details are logged, never
/// surfaced.
pub async fn resolve_session(
    client: &BackendClient,
    cache: Option<&SessionCache>,
    token: Option<&str>,
) -> SessionState {
    let Some(token) = token else {
        return SessionState::unauthenticated();
    };

    if let Some(cache) = cache {
        if let Some(state) = cache.get(token).await {
            return state;
        }
    }

    let state = match client.auth_status(token).await {
        Ok(body) => normalize_status_payload(&body),
        Err(UpstreamError::Status { status, message }) => {
            let mut state = SessionState::unauthenticated();
            if message_signals_suspension(&message) {
                state.status = AccountStatus::Suspended;
            }
            state.message = Some(message);
            tracing::debug!(status, "status check rejected");
            state
        }
        Err(err) => {
            tracing::error!(error = %err, "status check failed");
            let mut state = SessionState::unauthenticated();
            state.message = Some("Erreur interne du serveur".to_string());
            state
        }
    };

    if let Some(cache) = cache {
        cache.insert(token, state.clone()).await;
    }
    state
}

/// Opt-in short-lived session cache.
///
/// Keyed by a SHA-256 of the token so raw credentials never sit in the cache
/// map. Purely an optimization: with it disabled every listing call performs
/// its own identity check, which is correct but redundant within one page
/// load.
#[derive(Clone)]
pub struct SessionCache {
    inner: moka::future::Cache<String, SessionState>,
}

impl SessionCache {
    /// Create a cache holding entries for `ttl`.
    #[must_use]
    pub fn new(ttl: std::time::Duration) -> Self {
        Self {
            inner: moka::future::Cache::builder()
                .max_capacity(10_000)
                .time_to_live(ttl)
                .build(),
        }
    }

    fn key(token: &str) -> String {
        let digest = Sha256::digest(token.as_bytes());
        format!("{digest:x}")
    }

    async fn get(&self, token: &str) -> Option<SessionState> {
        self.inner.get(&Self::key(token)).await
    }

    async fn insert(&self, token: &str, state: SessionState) {
        self.inner.insert(Self::key(token), state).await;
    }
}
