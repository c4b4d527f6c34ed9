use askama::Template;
use axum::{Form, response::Response};

use super::{Alert, Shell, render, render_with_status};
use crate::{dto::auth::RegisterRequest, services::account_service, session::Session};

pub const REGISTERED_NOTICE: &str =
    "Thanks for registering! Online accounts are not available yet, so nothing was saved.";

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub shell: Shell,
    pub name: String,
    pub email: String,
}

pub async fn show(session: Session) -> Response {
    render(RegisterTemplate {
        shell: Shell::new(session, "Register", "/register"),
        name: String::new(),
        email: String::new(),
    })
}

pub async fn submit(session: Session, Form(form): Form<RegisterRequest>) -> Response {
    let shell = Shell::new(session, "Register", "/register");
    match account_service::register(&form) {
        Ok(()) => render(RegisterTemplate {
            shell: shell.with_alerts([Alert::success(REGISTERED_NOTICE)]),
            name: form.name,
            email: form.email,
        }),
        Err(err) => render_with_status(
            err.status(),
            RegisterTemplate {
                shell: shell.with_alerts(err.messages().into_iter().map(Alert::error)),
                name: form.name,
                email: form.email,
            },
        ),
    }
}
