//! Presentational HTML rendering. Pure functions from query results to
//! markup; no data access and no decisions beyond iteration.

use crate::models::{CustomerListRow, CustomerName, DashboardStats, InvoiceListRow};
use crate::validation::FieldErrors;

/// Minimal HTML escaping for text nodes and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Integer cents as a dollar string, e.g. 4999 -> "$49.99".
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}${}.{:02}", sign, cents / 100, cents % 100)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>{} | Acme Dashboard</title></head><body>\n{}\n</body></html>",
        escape(title),
        body
    )
}

fn nav() -> &'static str {
    "<nav><a href=\"/dashboard\">Home</a> \
     <a href=\"/dashboard/invoices\">Invoices</a> \
     <a href=\"/dashboard/customers\">Customers</a> \
     <form method=\"post\" action=\"/dashboard/logout\"><button type=\"submit\">Sign out</button></form></nav>"
}

pub fn landing_page() -> String {
    layout(
        "Welcome",
        "<h1>Acme</h1><p><a href=\"/login\">Log in</a> to manage invoices and customers.</p>",
    )
}

pub fn login_page(error: Option<&str>) -> String {
    let error_html = error
        .map(|e| format!("<p class=\"error\">{}</p>", escape(e)))
        .unwrap_or_default();
    layout(
        "Log in",
        &format!(
            "<h1>Log in</h1>{error_html}\
             <form method=\"post\" action=\"/login\">\
             <label>Email <input type=\"email\" name=\"email\" required></label>\
             <label>Password <input type=\"password\" name=\"password\" required></label>\
             <button type=\"submit\">Log in</button></form>"
        ),
    )
}

pub fn dashboard_page(stats: &DashboardStats) -> String {
    layout(
        "Dashboard",
        &format!(
            "{}<h1>Dashboard</h1><ul>\
             <li>Collected: {}</li>\
             <li>Pending: {}</li>\
             <li>Total Invoices: {}</li>\
             <li>Total Customers: {}</li></ul>",
            nav(),
            format_currency(stats.paid_cents),
            format_currency(stats.pending_cents),
            stats.invoice_count,
            stats.customer_count
        ),
    )
}

fn search_form(action: &str, query: &str) -> String {
    format!(
        "<form method=\"get\" action=\"{}\">\
         <input type=\"search\" name=\"query\" value=\"{}\" placeholder=\"Search...\">\
         <button type=\"submit\">Search</button></form>",
        action,
        escape(query)
    )
}

pub fn customers_page(customers: &[CustomerListRow], query: &str) -> String {
    let mut rows = String::new();
    for c in customers {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&c.name),
            escape(&c.email),
            c.total_invoices,
            format_currency(c.total_pending),
            format_currency(c.total_paid)
        ));
    }
    layout(
        "Customers",
        &format!(
            "{}<h1>Customers</h1>{}\
             <table><thead><tr><th>Name</th><th>Email</th><th>Total Invoices</th>\
             <th>Total Pending</th><th>Total Paid</th></tr></thead><tbody>{}</tbody></table>",
            nav(),
            search_form("/dashboard/customers", query),
            rows
        ),
    )
}

pub fn invoices_page(invoices: &[InvoiceListRow], query: &str) -> String {
    let mut rows = String::new();
    for inv in invoices {
        rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href=\"/dashboard/invoices/{id}/edit\">Edit</a>\
             <form method=\"post\" action=\"/dashboard/invoices/{id}/delete\">\
             <button type=\"submit\">Delete</button></form></td></tr>",
            escape(&inv.customer_name),
            escape(&inv.customer_email),
            format_currency(inv.amount),
            inv.date,
            inv.status,
            id = inv.id
        ));
    }
    layout(
        "Invoices",
        &format!(
            "{}<h1>Invoices</h1>{}\
             <p><a href=\"/dashboard/invoices/create\">Create Invoice</a></p>\
             <table><thead><tr><th>Customer</th><th>Email</th><th>Amount</th>\
             <th>Date</th><th>Status</th><th></th></tr></thead><tbody>{}</tbody></table>",
            nav(),
            search_form("/dashboard/invoices", query),
            rows
        ),
    )
}

/// Plain message page with a way back to the invoice list.
pub fn message_page(message: &str) -> String {
    layout(
        "Invoices",
        &format!(
            "{}<p>{}</p><p><a href=\"/dashboard/invoices\">Back to invoices</a></p>",
            nav(),
            escape(message)
        ),
    )
}

/// Current values for re-rendering the invoice form after a failed submit.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFormValues {
    pub customer_id: String,
    pub amount: String,
    pub status: String,
}

fn field_errors_html(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!("<p class=\"error\">{}</p>", escape(e)))
        .collect()
}

/// Shared create/edit invoice form. `errors`/`message` carry the outcome
/// of a rejected submission back into the markup.
pub fn invoice_form_page(
    title: &str,
    action: &str,
    customers: &[CustomerName],
    values: &InvoiceFormValues,
    errors: Option<&FieldErrors>,
    message: Option<&str>,
) -> String {
    let empty = FieldErrors::default();
    let errors = errors.unwrap_or(&empty);
    let message_html = message
        .map(|m| format!("<p class=\"error\">{}</p>", escape(m)))
        .unwrap_or_default();

    let mut options = String::new();
    for c in customers {
        let selected = if c.id.to_string() == values.customer_id {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            c.id,
            selected,
            escape(&c.name)
        ));
    }

    let status_options: String = ["pending", "paid"]
        .iter()
        .map(|s| {
            let checked = if *s == values.status { " checked" } else { "" };
            format!(
                "<label><input type=\"radio\" name=\"status\" value=\"{s}\"{checked}> {s}</label>"
            )
        })
        .collect();

    layout(
        title,
        &format!(
            "{nav}<h1>{title}</h1>{message_html}\
             <form method=\"post\" action=\"{action}\">\
             <label>Customer <select name=\"customer_id\">\
             <option value=\"\">Select a customer</option>{options}</select></label>{customer_errors}\
             <label>Amount <input type=\"text\" name=\"amount\" value=\"{amount}\"></label>{amount_errors}\
             <fieldset>{status_options}</fieldset>{status_errors}\
             <a href=\"/dashboard/invoices\">Cancel</a>\
             <button type=\"submit\">{title}</button></form>",
            nav = nav(),
            title = escape(title),
            amount = escape(&values.amount),
            customer_errors = field_errors_html(&errors.customer_id),
            amount_errors = field_errors_html(&errors.amount),
            status_errors = field_errors_html(&errors.status),
        ),
    )
}
