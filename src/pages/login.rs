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

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub shell: Shell,
    pub email: String,
}

pub async fn show(session: Session) -> Response {
    render(LoginTemplate {
        shell: Shell::new(session, "User Login", "/login"),
        email: String::new(),
    })
}

pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
    Form(form): Form<LoginRequest>,
) -> Response {
    match account_service::login(&form) {
        Ok(role) => (
            store_role(jar, role, state.config.cookie_secure),
            Redirect::to("/dashboard"),
        )
            .into_response(),
        Err(err) => render_with_status(
            err.status(),
            LoginTemplate {
                shell: Shell::new(session, "User Login", "/login")
                    .with_alerts(err.messages().into_iter().map(Alert::error)),
                email: form.email,
            },
        ),
    }
}
