//! Domain row types shared by the store, actions, and pages.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Invoice status. Stored lowercase in a TEXT column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// Strict parse: exactly "pending" or "paid", nothing else.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    /// Integer cents.
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Validated write payload for INSERT/UPDATE. `customer_id` stays a string;
/// the database casts it to uuid, so a malformed id surfaces as a DB error.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Invoice joined with customer display fields for the listing page.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct InvoiceListRow {
    pub id: Uuid,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
    pub customer_name: String,
    pub customer_email: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Customer with invoice aggregates for the customers table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CustomerListRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: i64,
    pub total_paid: i64,
}

/// id/name pair for the invoice form dropdown.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CustomerName {
    pub id: Uuid,
    pub name: String,
}

/// Card numbers for the dashboard overview.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardStats {
    pub invoice_count: i64,
    pub customer_count: i64,
    pub paid_cents: i64,
    pub pending_cents: i64,
}
