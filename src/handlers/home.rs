//! Landing page and dashboard overview.

use crate::error::AppError;
use crate::pages;
use crate::state::AppState;
use axum::{extract::State, response::Html};

pub async fn index() -> Html<String> {
    Html(pages::landing_page())
}

pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let stats = state.store.dashboard_stats().await?;
    Ok(Html(pages::dashboard_page(&stats)))
}
