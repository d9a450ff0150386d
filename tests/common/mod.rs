//! In-memory `Store` used by the integration tests, with write-failure
//! injection for the swallowed-error paths.

use acme_dashboard::error::AppError;
use acme_dashboard::models::{
    Customer, CustomerListRow, CustomerName, DashboardStats, Invoice, InvoiceListRow,
    InvoiceStatus, NewInvoice,
};
use acme_dashboard::store::Store;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemStore {
    pub invoices: RwLock<Vec<Invoice>>,
    pub customers: RwLock<Vec<Customer>>,
    fail: AtomicBool,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_customer(&self, name: &str, email: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.customers.write().unwrap().push(Customer {
            id,
            name: name.to_string(),
            email: email.to_string(),
            image_url: String::new(),
        });
        id
    }

    pub fn add_invoice(&self, customer_id: Uuid, amount: i64, status: InvoiceStatus) -> Uuid {
        let id = Uuid::new_v4();
        self.invoices.write().unwrap().push(Invoice {
            id,
            customer_id,
            amount,
            status,
            date: chrono::Utc::now().date_naive(),
        });
        id
    }

    /// Make every subsequent store call fail, simulating a lost database.
    pub fn fail_from_now_on(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn invoice_count(&self) -> usize {
        self.invoices.read().unwrap().len()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolClosed));
        }
        Ok(())
    }

    fn matches(query: &str, name: &str, email: &str) -> bool {
        let q = query.to_lowercase();
        name.to_lowercase().contains(&q) || email.to_lowercase().contains(&q)
    }
}

#[async_trait]
impl Store for MemStore {
    async fn invoices(&self, query: &str) -> Result<Vec<InvoiceListRow>, AppError> {
        self.check()?;
        let customers = self.customers.read().unwrap();
        let mut rows: Vec<InvoiceListRow> = self
            .invoices
            .read()
            .unwrap()
            .iter()
            .filter_map(|inv| {
                let c = customers.iter().find(|c| c.id == inv.customer_id)?;
                if !Self::matches(query, &c.name, &c.email) {
                    return None;
                }
                Some(InvoiceListRow {
                    id: inv.id,
                    amount: inv.amount,
                    status: inv.status,
                    date: inv.date,
                    customer_name: c.name.clone(),
                    customer_email: c.email.clone(),
                })
            })
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn invoice(&self, id: &str) -> Result<Option<Invoice>, AppError> {
        self.check()?;
        Ok(self
            .invoices
            .read()
            .unwrap()
            .iter()
            .find(|inv| inv.id.to_string() == id)
            .cloned())
    }

    async fn insert_invoice(&self, new: &NewInvoice) -> Result<(), AppError> {
        self.check()?;
        let customer_id = Uuid::parse_str(&new.customer_id)
            .map_err(|_| AppError::BadRequest("invalid uuid".into()))?;
        self.invoices.write().unwrap().push(Invoice {
            id: Uuid::new_v4(),
            customer_id,
            amount: new.amount,
            status: new.status,
            date: new.date,
        });
        Ok(())
    }

    async fn update_invoice(&self, id: &str, new: &NewInvoice) -> Result<(), AppError> {
        self.check()?;
        let customer_id = Uuid::parse_str(&new.customer_id)
            .map_err(|_| AppError::BadRequest("invalid uuid".into()))?;
        // Zero matching rows is success, like the SQL UPDATE.
        for inv in self.invoices.write().unwrap().iter_mut() {
            if inv.id.to_string() == id {
                inv.customer_id = customer_id;
                inv.amount = new.amount;
                inv.status = new.status;
            }
        }
        Ok(())
    }

    async fn delete_invoice(&self, id: &str) -> Result<(), AppError> {
        self.check()?;
        self.invoices
            .write()
            .unwrap()
            .retain(|inv| inv.id.to_string() != id);
        Ok(())
    }

    async fn customers(&self, query: &str) -> Result<Vec<CustomerListRow>, AppError> {
        self.check()?;
        let invoices = self.invoices.read().unwrap();
        let mut rows: Vec<CustomerListRow> = self
            .customers
            .read()
            .unwrap()
            .iter()
            .filter(|c| Self::matches(query, &c.name, &c.email))
            .map(|c| {
                let mine: Vec<_> = invoices.iter().filter(|i| i.customer_id == c.id).collect();
                CustomerListRow {
                    id: c.id,
                    name: c.name.clone(),
                    email: c.email.clone(),
                    image_url: c.image_url.clone(),
                    total_invoices: mine.len() as i64,
                    total_pending: mine
                        .iter()
                        .filter(|i| i.status == InvoiceStatus::Pending)
                        .map(|i| i.amount)
                        .sum(),
                    total_paid: mine
                        .iter()
                        .filter(|i| i.status == InvoiceStatus::Paid)
                        .map(|i| i.amount)
                        .sum(),
                }
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn customer_names(&self) -> Result<Vec<CustomerName>, AppError> {
        self.check()?;
        let mut rows: Vec<CustomerName> = self
            .customers
            .read()
            .unwrap()
            .iter()
            .map(|c| CustomerName {
                id: c.id,
                name: c.name.clone(),
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        self.check()?;
        let invoices = self.invoices.read().unwrap();
        Ok(DashboardStats {
            invoice_count: invoices.len() as i64,
            customer_count: self.customers.read().unwrap().len() as i64,
            paid_cents: invoices
                .iter()
                .filter(|i| i.status == InvoiceStatus::Paid)
                .map(|i| i.amount)
                .sum(),
            pending_cents: invoices
                .iter()
                .filter(|i| i.status == InvoiceStatus::Pending)
                .map(|i| i.amount)
                .sum(),
        })
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check()
    }
}
