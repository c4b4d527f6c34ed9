use askama::Template;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use super::{Alert, Shell, render, render_with_status};
use crate::{
    dto::auth::LoginRequest,
    services::account_service,
    session::{Session, store_role},
    state::AppState,
};

pub const INVALID_CREDENTIALS: &str = "Invalid admin credentials";

#[derive(Template)]
#[template(path = "admin_login.html")]
pub struct AdminLoginTemplate {
    pub shell: Shell,
    pub email: String,
}

pub async fn show(session: Session) -> Response {
    render(AdminLoginTemplate {
        shell: Shell::new(session, "Admin Login", "/admin-login"),
        email: String::new(),
    })
}

/// A wrong pair leaves the cookie untouched.
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Form(form): Form<LoginRequest>,
) -> Response {
    match account_service::admin_login(&state.config, &form) {
        Ok(role) => (
            store_role(jar, role, state.config.cookie_secure),
            Redirect::to("/admin"),
        )
            .into_response(),
        Err(err) => render_with_status(
            err.status(),
            AdminLoginTemplate {
                shell: Shell::new(session, "Admin Login", "/admin-login")
                    .with_alerts([Alert::error(INVALID_CREDENTIALS)]),
                email: form.email,
            },
        ),
    }
}
