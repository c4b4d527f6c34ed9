use askama::Template;
use axum::response::Response;

use super::{Shell, render};
use crate::session::Session;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub shell: Shell,
}

pub async fn show(session: Session) -> Response {
    render(HomeTemplate {
        shell: Shell::new(session, "Home", "/"),
    })
}
