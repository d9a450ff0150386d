//! Acme dashboard: invoice and customer management over PostgreSQL.

pub mod actions;
pub mod auth;
pub mod cache;
pub mod case;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use actions::{create_invoice, delete_invoice, update_invoice, ActionOutcome};
pub use auth::{authorize, AuthDecision};
pub use cache::PageCache;
pub use config::AppConfig;
pub use error::AppError;
pub use routes::app;
pub use state::AppState;
pub use store::{ensure_tables, PgStore, Store};
pub use validation::{parse_invoice_form, FieldErrors, InvoiceInput};
