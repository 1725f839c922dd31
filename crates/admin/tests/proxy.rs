//! End-to-end tests: the panel router against an in-process mock backend.
//!
//! Both the panel and the mock backend listen on ephemeral ports; requests
//! are driven with reqwest so cookies and redirects behave as a browser
//! would.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::{get, patch, post},
};
use serde_json::{Value, json};

use goodfood_admin::{
    config::{AdminConfig, BackendConfig},
    routes,
    state::AppState,
};

/// Call counters observed by the assertions.
#[derive(Default)]
struct Counters {
    status_calls: AtomicUsize,
    list_calls: AtomicUsize,
    mutation_calls: AtomicUsize,
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// The mock platform backend.
///
/// Tokens select a persona: `super` is a super-admin, `basic` a plain
/// admin, `suspended` a suspended account, `tok` an account with a pending
/// forced password change.
fn mock_backend(counters: Arc<Counters>) -> Router {
    let status = {
        let counters = Arc::clone(&counters);
        move |headers: HeaderMap| {
            counters.status_calls.fetch_add(1, Ordering::SeqCst);
            let body = match bearer(&headers) {
                Some("super") => (
                    StatusCode::OK,
                    json!({"user": {"id": 1, "email": "root@goodfood.example", "role": "super-admin", "status": "active"}}),
                ),
                Some("basic") => (
                    StatusCode::OK,
                    json!({"user": {"id": 2, "email": "mod@goodfood.example", "role": "admin", "status": "active"}}),
                ),
                Some("tok") => (
                    StatusCode::OK,
                    json!({
                        "user": {"id": 3, "email": "new@goodfood.example", "role": "admin", "status": "active"},
                        "force_password_change": true
                    }),
                ),
                Some("suspended") => (
                    StatusCode::FORBIDDEN,
                    json!({"message": "Votre compte est suspendu"}),
                ),
                _ => (StatusCode::UNAUTHORIZED, json!({"message": "Non autorisé"})),
            };
            async move { (body.0, Json(body.1)) }
        }
    };

    let list_users = {
        let counters = Arc::clone(&counters);
        move || {
            counters.list_calls.fetch_add(1, Ordering::SeqCst);
            async move {
                Json(json!({
                    "statusCode": 200,
                    "data": {
                        "users": [
                            {"id": 1, "email": "a@goodfood.example"},
                            {"id": 2, "email": "b@goodfood.example"}
                        ],
                        "meta": {"totalItems": 2, "currentPage": 1, "itemsPerPage": 10, "totalPages": 1}
                    }
                }))
            }
        }
    };

    let get_admin_user = move |Path(id): Path<i64>| async move {
        let role = if id == 1 { "super-admin" } else { "admin" };
        Json(json!({"id": id, "email": "target@goodfood.example", "role": role}))
    };

    let suspend_admin_user = {
        let counters = Arc::clone(&counters);
        move |Path(id): Path<i64>| {
            counters.mutation_calls.fetch_add(1, Ordering::SeqCst);
            async move { Json(json!({"message": "Compte suspendu", "id": id})) }
        }
    };

    let login = move || async move {
        Json(json!({
            "accessToken": "tok",
            "refreshToken": "ref",
            "force_password_change": true
        }))
    };

    Router::new()
        .route("/administrateur/api/auth/status", get(status))
        .route("/administrateur/api/auth/login", post(login))
        .route("/restaurateur/api/users", get(list_users))
        .route("/administrateur/api/users/{id}", get(get_admin_user))
        .route(
            "/administrateur/api/users/{id}/suspend",
            patch(suspend_admin_user),
        )
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Spin up the mock backend plus the panel pointed at it.
async fn setup() -> (SocketAddr, Arc<Counters>) {
    let counters = Arc::new(Counters::default());
    let backend_addr = spawn(mock_backend(Arc::clone(&counters))).await;

    let config = AdminConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "http://localhost:3000".to_string(),
        backend: BackendConfig {
            base_url: format!("http://{backend_addr}"),
        },
        session_cache_ttl: None,
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 1.0,
    };
    let panel_addr = spawn(routes::router(AppState::new(config))).await;

    (panel_addr, counters)
}

#[tokio::test]
async fn missing_cookie_returns_401_without_upstream_call() {
    let (panel, counters) = setup().await;

    let response = reqwest::get(format!("http://{panel}/api/proxy/users"))
        .await
        .unwrap();

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Non autorisé");

    assert_eq!(counters.status_calls.load(Ordering::SeqCst), 0);
    assert_eq!(counters.list_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn suspending_a_super_admin_is_denied_without_mutation() {
    let (panel, counters) = setup().await;
    let client = reqwest::Client::new();

    let response = client
        .patch(format!("http://{panel}/api/proxy/admin-users/1/suspend"))
        .header("Cookie", "accessToken=super")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 403);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Action non autorisée sur un super-administrateur");
    assert_eq!(counters.mutation_calls.load(Ordering::SeqCst), 0);

    // A non-protected target goes through.
    let response = client
        .patch(format!("http://{panel}/api/proxy/admin-users/2/suspend"))
        .header("Cookie", "accessToken=super")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(counters.mutation_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn admin_user_surface_requires_super_admin_role() {
    let (panel, _counters) = setup().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{panel}/api/proxy/admin-users"))
        .header("Cookie", "accessToken=basic")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 403);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Accès restreint aux super-administrateurs");
}

#[tokio::test]
async fn nested_envelope_is_normalized_through_the_proxy() {
    let (panel, _counters) = setup().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{panel}/api/proxy/users"))
        .header("Cookie", "accessToken=basic")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
    assert_eq!(body["pagination"]["total"], 2);
    assert_eq!(body["pagination"]["totalPages"], 1);
}

#[tokio::test]
async fn login_sets_cookies_and_guard_forces_password_change() {
    let (panel, _counters) = setup().await;
    let client = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap();

    let response = client
        .post(format!("http://{panel}/api/proxy/auth/login"))
        .json(&json!({"email": "new@goodfood.example", "password": "pw"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let cookies: Vec<String> = response
        .headers()
        .get_all("set-cookie")
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert!(cookies.iter().any(|c| c.starts_with("accessToken=tok")));
    assert!(cookies.iter().any(|c| c.starts_with("refreshToken=ref")));
    assert!(cookies.iter().any(|c| c.starts_with("forcePasswordChange=true")));
    assert!(cookies.iter().all(|c| c.contains("HttpOnly")));

    // Any page now bounces to the forced password change screen.
    let response = client
        .get(format!("http://{panel}/dashboard"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.url().path(), "/change-password");
}

#[tokio::test]
async fn suspended_account_is_routed_to_notallowed() {
    let (panel, _counters) = setup().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{panel}/users"))
        .header("Cookie", "accessToken=suspended")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.url().path(), "/notallowed");
    let body = response.text().await.unwrap();
    assert!(body.contains("Compte suspendu"));
}
