//! Mutating actions behind the invoice forms. Persistence errors are
//! swallowed into a user-facing message so a failed write never takes
//! down the page that submitted it.

use crate::cache::PageCache;
use crate::models::NewInvoice;
use crate::store::Store;
use crate::validation::{parse_invoice_form, to_cents, FieldErrors};
use chrono::Utc;
use std::collections::HashMap;

/// Listing path invalidated and redirected to after a successful write.
pub const INVOICES_PATH: &str = "/dashboard/invoices";

pub const MSG_MISSING_FIELDS: &str = "Missing fields. Failed to create the invoice";

/// Terminal outcome of a mutating action. Redirects are modeled as data
/// so callers (and tests) decide how to follow them.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Client should navigate to this path; the action is done.
    Redirected(String),
    /// Success with no navigation (delete stays on the list view).
    Completed { message: String },
    /// Validation failed; nothing was persisted.
    Invalid {
        errors: FieldErrors,
        message: String,
    },
    /// The write failed; reported as a message, never re-thrown.
    Failed { message: String },
}

/// Validate, insert, invalidate the listing, redirect.
pub async fn create_invoice(
    store: &dyn Store,
    cache: &PageCache,
    fields: &HashMap<String, String>,
) -> ActionOutcome {
    let input = match parse_invoice_form(fields) {
        Ok(input) => input,
        Err(errors) => {
            return ActionOutcome::Invalid {
                errors,
                message: MSG_MISSING_FIELDS.to_string(),
            }
        }
    };

    let new = NewInvoice {
        customer_id: input.customer_id,
        amount: to_cents(input.amount),
        status: input.status,
        date: Utc::now().date_naive(),
    };

    match store.insert_invoice(&new).await {
        Ok(()) => cache.invalidate(INVOICES_PATH),
        Err(e) => {
            tracing::error!(error = %e, "invoice insert failed");
            return ActionOutcome::Failed {
                message: "DB Error: Creating invoice".to_string(),
            };
        }
    }

    ActionOutcome::Redirected(INVOICES_PATH.to_string())
}

/// Same validation as create; updates the row matching `id`. A missing
/// row is indistinguishable from success (no existence check).
pub async fn update_invoice(
    store: &dyn Store,
    cache: &PageCache,
    id: &str,
    fields: &HashMap<String, String>,
) -> ActionOutcome {
    let input = match parse_invoice_form(fields) {
        Ok(input) => input,
        Err(errors) => {
            return ActionOutcome::Invalid {
                errors,
                message: MSG_MISSING_FIELDS.to_string(),
            }
        }
    };

    let new = NewInvoice {
        customer_id: input.customer_id,
        amount: to_cents(input.amount),
        status: input.status,
        // Date is set at creation and not touched on update.
        date: Utc::now().date_naive(),
    };

    match store.update_invoice(id, &new).await {
        Ok(()) => cache.invalidate(INVOICES_PATH),
        Err(e) => {
            tracing::error!(error = %e, invoice_id = id, "invoice update failed");
            return ActionOutcome::Failed {
                message: format!("DB Error: Updating invoice {id}"),
            };
        }
    }

    ActionOutcome::Redirected(INVOICES_PATH.to_string())
}

/// Unconditional delete. Deleting an id that no longer exists still
/// reports success, so the action is idempotent from the list view.
pub async fn delete_invoice(store: &dyn Store, cache: &PageCache, id: &str) -> ActionOutcome {
    match store.delete_invoice(id).await {
        Ok(()) => {
            cache.invalidate(INVOICES_PATH);
            ActionOutcome::Completed {
                message: format!("Deleted invoice {id}"),
            }
        }
        Err(e) => {
            tracing::error!(error = %e, invoice_id = id, "invoice delete failed");
            ActionOutcome::Failed {
                message: format!("DB Error: Deleting invoice {id}"),
            }
        }
    }
}
