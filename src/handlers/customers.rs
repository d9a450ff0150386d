//! Customer listing page.

use crate::error::AppError;
use crate::pages;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::Html,
};
use std::collections::HashMap;

/// GET /dashboard/customers?query= — filtered customer table.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let query = params.get("query").map(String::as_str).unwrap_or("");
    let customers = state.store.customers(query).await?;
    Ok(Html(pages::customers_page(&customers, query)))
}
