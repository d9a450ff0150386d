//! Invoice form schema: raw string fields in, typed record or field errors out.

use crate::case::form_keys_to_snake_case;
use crate::models::InvoiceStatus;
use serde::Serialize;
use std::collections::HashMap;

pub const MSG_CUSTOMER: &str = "Please select a customer";
pub const MSG_AMOUNT: &str = "Please enter a number greater than 0";
pub const MSG_STATUS: &str = "Choose either one";

/// Per-field error messages. Empty vectors mean the field passed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors {
    pub customer_id: Vec<String>,
    pub amount: Vec<String>,
    pub status: Vec<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.customer_id.is_empty() && self.amount.is_empty() && self.status.is_empty()
    }
}

/// The validated shape of an invoice form. Amount is still the decimal the
/// user typed; conversion to cents happens in the action.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceInput {
    pub customer_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

/// Validate a submitted invoice form. Field names are normalized to
/// snake_case first; unknown fields are ignored. Never panics: a
/// non-numeric amount is a field error, not a crash.
pub fn parse_invoice_form(fields: &HashMap<String, String>) -> Result<InvoiceInput, FieldErrors> {
    let fields = form_keys_to_snake_case(fields);
    let mut errors = FieldErrors::default();

    let customer_id = fields.get("customer_id").map(String::as_str).unwrap_or("").trim();
    if customer_id.is_empty() {
        errors.customer_id.push(MSG_CUSTOMER.to_string());
    }

    let amount = match fields.get("amount").map(String::as_str).unwrap_or("").trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Some(n),
        Ok(_) | Err(_) => {
            errors.amount.push(MSG_AMOUNT.to_string());
            None
        }
    };

    let status = match InvoiceStatus::parse(fields.get("status").map(String::as_str).unwrap_or("")) {
        Some(s) => Some(s),
        None => {
            errors.status.push(MSG_STATUS.to_string());
            None
        }
    };

    match (amount, status) {
        (Some(amount), Some(status)) if errors.is_empty() => Ok(InvoiceInput {
            customer_id: customer_id.to_string(),
            amount,
            status,
        }),
        _ => Err(errors),
    }
}

/// Decimal amount to stored integer cents.
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(customer_id: &str, amount: &str, status: &str) -> HashMap<String, String> {
        let mut m = HashMap::new();
        m.insert("customer_id".to_string(), customer_id.to_string());
        m.insert("amount".to_string(), amount.to_string());
        m.insert("status".to_string(), status.to_string());
        m
    }

    #[test]
    fn valid_form_parses() {
        let input = parse_invoice_form(&form("c1", "49.99", "pending")).unwrap();
        assert_eq!(input.customer_id, "c1");
        assert_eq!(input.amount, 49.99);
        assert_eq!(input.status, InvoiceStatus::Pending);
    }

    #[test]
    fn camel_case_keys_accepted() {
        let mut m = HashMap::new();
        m.insert("customerId".to_string(), "c1".to_string());
        m.insert("amount".to_string(), "10".to_string());
        m.insert("status".to_string(), "paid".to_string());
        let input = parse_invoice_form(&m).unwrap();
        assert_eq!(input.customer_id, "c1");
        assert_eq!(input.status, InvoiceStatus::Paid);
    }

    #[test]
    fn empty_customer_is_field_error() {
        let errors = parse_invoice_form(&form("", "10", "pending")).unwrap_err();
        assert_eq!(errors.customer_id, vec![MSG_CUSTOMER.to_string()]);
        assert!(errors.amount.is_empty());
        assert!(errors.status.is_empty());
    }

    #[test]
    fn zero_and_negative_amounts_rejected() {
        for amount in ["0", "-3", "-0.01"] {
            let errors = parse_invoice_form(&form("c1", amount, "pending")).unwrap_err();
            assert_eq!(errors.amount, vec![MSG_AMOUNT.to_string()], "amount {amount}");
        }
    }

    #[test]
    fn non_numeric_amount_is_field_error_not_panic() {
        let errors = parse_invoice_form(&form("c1", "abc", "pending")).unwrap_err();
        assert_eq!(errors.amount, vec![MSG_AMOUNT.to_string()]);
    }

    #[test]
    fn unknown_status_rejected() {
        for status in ["overdue", "PAID", "", "Pending"] {
            let errors = parse_invoice_form(&form("c1", "10", status)).unwrap_err();
            assert_eq!(errors.status, vec![MSG_STATUS.to_string()], "status {status:?}");
        }
    }

    #[test]
    fn missing_fields_collect_all_errors() {
        let errors = parse_invoice_form(&HashMap::new()).unwrap_err();
        assert!(!errors.customer_id.is_empty());
        assert!(!errors.amount.is_empty());
        assert!(!errors.status.is_empty());
    }

    #[test]
    fn extra_fields_ignored() {
        let mut m = form("c1", "10", "paid");
        m.insert("tracking_pixel".to_string(), "x".to_string());
        assert!(parse_invoice_form(&m).is_ok());
    }

    #[test]
    fn cents_conversion_rounds() {
        assert_eq!(to_cents(49.99), 4999);
        assert_eq!(to_cents(10.0), 1000);
        assert_eq!(to_cents(123.45), 12345);
    }
}
