//! Data access: the `Store` trait and its PostgreSQL implementation.
//! All statements use bound parameters; identifiers are fixed strings.

use crate::error::AppError;
use crate::models::{
    CustomerListRow, CustomerName, DashboardStats, Invoice, InvoiceListRow, NewInvoice,
};
use async_trait::async_trait;
use sqlx::PgPool;

/// Persistence seam for invoices and customers. The production
/// implementation is [`PgStore`]; tests substitute an in-memory store.
#[async_trait]
pub trait Store: Send + Sync {
    /// Invoices joined with customer display fields, newest first.
    /// `query` filters case-insensitively on customer name/email;
    /// empty returns everything.
    async fn invoices(&self, query: &str) -> Result<Vec<InvoiceListRow>, AppError>;

    /// One invoice by id, for the edit form.
    async fn invoice(&self, id: &str) -> Result<Option<Invoice>, AppError>;

    async fn insert_invoice(&self, new: &NewInvoice) -> Result<(), AppError>;

    /// Update by id. Zero affected rows is not an error.
    async fn update_invoice(&self, id: &str, new: &NewInvoice) -> Result<(), AppError>;

    /// Delete by id. Zero affected rows is not an error.
    async fn delete_invoice(&self, id: &str) -> Result<(), AppError>;

    /// Customers with invoice aggregates, filtered case-insensitively on
    /// name/email, ordered by name ascending. Empty query returns all.
    async fn customers(&self, query: &str) -> Result<Vec<CustomerListRow>, AppError>;

    /// id/name pairs for the invoice form dropdown, ordered by name.
    async fn customer_names(&self) -> Result<Vec<CustomerName>, AppError>;

    async fn dashboard_stats(&self) -> Result<DashboardStats, AppError>;

    /// Connectivity probe for the readiness endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}

/// PostgreSQL-backed store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

fn like_pattern(query: &str) -> String {
    format!("%{}%", query)
}

#[async_trait]
impl Store for PgStore {
    async fn invoices(&self, query: &str) -> Result<Vec<InvoiceListRow>, AppError> {
        let rows = sqlx::query_as::<_, InvoiceListRow>(
            r#"
            SELECT invoices.id, invoices.amount, invoices.status, invoices.date,
                   customers.name AS customer_name, customers.email AS customer_email
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE customers.name ILIKE $1 OR customers.email ILIKE $1
            ORDER BY invoices.date DESC
            "#,
        )
        .bind(like_pattern(query))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn invoice(&self, id: &str) -> Result<Option<Invoice>, AppError> {
        let row = sqlx::query_as::<_, Invoice>(
            "SELECT id, customer_id, amount, status, date FROM invoices WHERE id = $1::uuid",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert_invoice(&self, new: &NewInvoice) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO invoices (customer_id, amount, status, date) \
             VALUES ($1::uuid, $2, $3, $4)",
        )
        .bind(&new.customer_id)
        .bind(new.amount)
        .bind(new.status.as_str())
        .bind(new.date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_invoice(&self, id: &str, new: &NewInvoice) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE invoices SET customer_id = $1::uuid, amount = $2, status = $3 \
             WHERE id = $4::uuid",
        )
        .bind(&new.customer_id)
        .bind(new.amount)
        .bind(new.status.as_str())
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_invoice(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM invoices WHERE id = $1::uuid")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn customers(&self, query: &str) -> Result<Vec<CustomerListRow>, AppError> {
        let rows = sqlx::query_as::<_, CustomerListRow>(
            r#"
            SELECT customers.id, customers.name, customers.email, customers.image_url,
                   COUNT(invoices.id) AS total_invoices,
                   COALESCE(SUM(invoices.amount) FILTER (WHERE invoices.status = 'pending'), 0)::bigint AS total_pending,
                   COALESCE(SUM(invoices.amount) FILTER (WHERE invoices.status = 'paid'), 0)::bigint AS total_paid
            FROM customers
            LEFT JOIN invoices ON customers.id = invoices.customer_id
            WHERE customers.name ILIKE $1 OR customers.email ILIKE $1
            GROUP BY customers.id, customers.name, customers.email, customers.image_url
            ORDER BY customers.name ASC
            "#,
        )
        .bind(like_pattern(query))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn customer_names(&self) -> Result<Vec<CustomerName>, AppError> {
        let rows = sqlx::query_as::<_, CustomerName>(
            "SELECT id, name FROM customers ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        let (invoice_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM invoices")
            .fetch_one(&self.pool)
            .await?;
        let (customer_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;
        let (paid_cents, pending_cents): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(amount) FILTER (WHERE status = 'paid'), 0)::bigint,
                   COALESCE(SUM(amount) FILTER (WHERE status = 'pending'), 0)::bigint
            FROM invoices
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(DashboardStats {
            invoice_count,
            customer_count,
            paid_cents,
            pending_cents,
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Create the application tables if they do not exist. Idempotent.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("CREATE EXTENSION IF NOT EXISTS pgcrypto")
        .execute(pool)
        .await?;
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            image_url TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS invoices (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            customer_id UUID NOT NULL REFERENCES customers(id),
            amount BIGINT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            date DATE NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}
