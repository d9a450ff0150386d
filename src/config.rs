//! Environment configuration. All values have local-development defaults.

/// Runtime configuration, read once at startup (after `dotenvy::dotenv`).
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    /// Credentials accepted by the login form. Session issuance is the only
    /// auth concern owned by this app; everything else is the gate's boolean.
    pub admin_email: String,
    pub admin_password: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/acme_dashboard".into()),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into()),
            admin_email: std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "user@nextmail.com".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "123456".into()),
        }
    }
}
