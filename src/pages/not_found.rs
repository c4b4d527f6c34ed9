use askama::Template;
use axum::{http::StatusCode, response::Response};

use super::{Shell, render_with_status};
use crate::session::Session;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub shell: Shell,
    pub path: String,
}

pub fn page(session: Session, path: &str) -> Response {
    render_with_status(
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            shell: Shell::new(session, "Page not found", path),
            path: path.to_string(),
        },
    )
}
