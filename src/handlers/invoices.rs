//! Invoice pages and form actions.

use crate::actions::{self, ActionOutcome, INVOICES_PATH};
use crate::case::form_keys_to_snake_case;
use crate::error::AppError;
use crate::pages::{self, InvoiceFormValues};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use std::collections::HashMap;

/// GET /dashboard/invoices?query= — filtered invoice table. The
/// unfiltered render is served from the page cache until a mutating
/// action invalidates it.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let query = params.get("query").map(String::as_str).unwrap_or("");
    if query.is_empty() {
        if let Some(html) = state.cache.get(INVOICES_PATH) {
            return Ok(Html(html));
        }
    }
    let invoices = state.store.invoices(query).await?;
    let html = pages::invoices_page(&invoices, query);
    if query.is_empty() {
        state.cache.put(INVOICES_PATH, html.clone());
    }
    Ok(Html(html))
}

fn submitted_values(fields: &HashMap<String, String>) -> InvoiceFormValues {
    let fields = form_keys_to_snake_case(fields);
    InvoiceFormValues {
        customer_id: fields.get("customer_id").cloned().unwrap_or_default(),
        amount: fields.get("amount").cloned().unwrap_or_default(),
        status: fields.get("status").cloned().unwrap_or_default(),
    }
}

/// GET /dashboard/invoices/create — blank invoice form.
pub async fn create_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let customers = state.store.customer_names().await?;
    Ok(Html(pages::invoice_form_page(
        "Create Invoice",
        "/dashboard/invoices/create",
        &customers,
        &InvoiceFormValues::default(),
        None,
        None,
    )))
}

/// POST /dashboard/invoices/create — run the create action and either
/// follow its redirect or re-render the form with its errors.
pub async fn create(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    match actions::create_invoice(state.store.as_ref(), &state.cache, &fields).await {
        ActionOutcome::Redirected(path) => Ok(Redirect::to(&path).into_response()),
        ActionOutcome::Completed { .. } => Ok(Redirect::to(INVOICES_PATH).into_response()),
        ActionOutcome::Invalid { errors, message } => {
            let customers = state.store.customer_names().await?;
            Ok(Html(pages::invoice_form_page(
                "Create Invoice",
                "/dashboard/invoices/create",
                &customers,
                &submitted_values(&fields),
                Some(&errors),
                Some(&message),
            ))
            .into_response())
        }
        ActionOutcome::Failed { message } => {
            let customers = state.store.customer_names().await?;
            Ok(Html(pages::invoice_form_page(
                "Create Invoice",
                "/dashboard/invoices/create",
                &customers,
                &submitted_values(&fields),
                None,
                Some(&message),
            ))
            .into_response())
        }
    }
}

/// GET /dashboard/invoices/:id/edit — form prefilled from the stored row.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let invoice = state
        .store
        .invoice(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("invoice {id}")))?;
    let customers = state.store.customer_names().await?;
    let values = InvoiceFormValues {
        customer_id: invoice.customer_id.to_string(),
        amount: format!("{:.2}", invoice.amount as f64 / 100.0),
        status: invoice.status.as_str().to_string(),
    };
    Ok(Html(pages::invoice_form_page(
        "Edit Invoice",
        &format!("/dashboard/invoices/{id}/edit"),
        &customers,
        &values,
        None,
        None,
    )))
}

/// POST /dashboard/invoices/:id/edit — run the update action.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, AppError> {
    match actions::update_invoice(state.store.as_ref(), &state.cache, &id, &fields).await {
        ActionOutcome::Redirected(path) => Ok(Redirect::to(&path).into_response()),
        ActionOutcome::Completed { .. } => Ok(Redirect::to(INVOICES_PATH).into_response()),
        ActionOutcome::Invalid { errors, message } => {
            let customers = state.store.customer_names().await?;
            Ok(Html(pages::invoice_form_page(
                "Edit Invoice",
                &format!("/dashboard/invoices/{id}/edit"),
                &customers,
                &submitted_values(&fields),
                Some(&errors),
                Some(&message),
            ))
            .into_response())
        }
        ActionOutcome::Failed { message } => {
            let customers = state.store.customer_names().await?;
            Ok(Html(pages::invoice_form_page(
                "Edit Invoice",
                &format!("/dashboard/invoices/{id}/edit"),
                &customers,
                &submitted_values(&fields),
                None,
                Some(&message),
            ))
            .into_response())
        }
    }
}

/// POST /dashboard/invoices/:id/delete — fire-and-forget from a list
/// row; success lands back on the listing.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match actions::delete_invoice(state.store.as_ref(), &state.cache, &id).await {
        ActionOutcome::Completed { message } => {
            tracing::info!(invoice_id = %id, %message, "invoice deleted");
            Ok(Redirect::to(INVOICES_PATH).into_response())
        }
        ActionOutcome::Failed { message } => Ok(Html(pages::message_page(&message)).into_response()),
        ActionOutcome::Redirected(path) => Ok(Redirect::to(&path).into_response()),
        ActionOutcome::Invalid { message, .. } => Ok(Html(pages::message_page(&message)).into_response()),
    }
}
