//! HTTP handlers for pages, form actions, and session management.

pub mod customers;
pub mod home;
pub mod invoices;
pub mod session;
