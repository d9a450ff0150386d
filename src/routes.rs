//! Router assembly. Page routes sit behind the authorization gate; ops
//! endpoints (health/ready/version) are mounted outside it.

use crate::auth;
use crate::handlers::{customers, home, invoices, session};
use crate::state::AppState;
use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (axum::http::StatusCode, Json<ReadyBody>)> {
    if state.store.ping().await.is_err() {
        return Err((
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: "ok",
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Ops routes: GET /health, /ready, /version. Not subject to the gate.
pub fn ops_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}

/// All user-facing pages and form actions, wrapped by the gate.
pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/login", get(session::login_form).post(session::login))
        .route("/dashboard", get(home::dashboard))
        .route("/dashboard/logout", post(session::logout))
        .route("/dashboard/customers", get(customers::list))
        .route("/dashboard/invoices", get(invoices::list))
        .route(
            "/dashboard/invoices/create",
            get(invoices::create_form).post(invoices::create),
        )
        .route(
            "/dashboard/invoices/:id/edit",
            get(invoices::edit_form).post(invoices::update),
        )
        .route("/dashboard/invoices/:id/delete", post(invoices::delete))
        .layer(middleware::from_fn(auth::gate))
        .with_state(state)
}

/// Full application router with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(ops_routes(state.clone()))
        .merge(page_routes(state))
        .layer(TraceLayer::new_for_http())
}
