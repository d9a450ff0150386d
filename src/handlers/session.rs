//! Session issue and teardown. Credential checking is deliberately
//! minimal; the gate only ever looks at cookie presence.

use crate::auth::{DASHBOARD_PATH, LOGIN_PATH, SESSION_COOKIE};
use crate::pages;
use crate::state::AppState;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

pub async fn login_form() -> Html<String> {
    Html(pages::login_page(None))
}

/// POST /login — set the session cookie and land on the dashboard, or
/// re-render the form.
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    if form.email == state.config.admin_email && form.password == state.config.admin_password {
        tracing::info!(email = %form.email, "login succeeded");
        (
            [(
                header::SET_COOKIE,
                format!("{SESSION_COOKIE}=1; Path=/; HttpOnly; SameSite=Lax"),
            )],
            Redirect::to(DASHBOARD_PATH),
        )
            .into_response()
    } else {
        tracing::warn!(email = %form.email, "login rejected");
        Html(pages::login_page(Some("Invalid email or password"))).into_response()
    }
}

/// POST /dashboard/logout — clear the cookie and return to the login page.
pub async fn logout() -> impl IntoResponse {
    (
        [(
            header::SET_COOKIE,
            format!("{SESSION_COOKIE}=; Path=/; Max-Age=0"),
        )],
        Redirect::to(LOGIN_PATH),
    )
}
