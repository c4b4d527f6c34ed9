//! Server-rendered page views and the shell around them.

use askama::Template;
use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};

use crate::{session::Session, state::AppState};

pub mod admin;
pub mod admin_login;
pub mod booking;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod logout;
pub mod not_found;
pub mod register;
pub mod services;
pub mod shop;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::show))
        .route("/services", get(services::show))
        .route("/shop", get(shop::show))
        .route("/shop/cart", post(shop::add_to_cart))
        .route("/booking", get(booking::show).post(booking::submit))
        .route("/dashboard", get(dashboard::show))
        .route("/login", get(login::show).post(login::submit))
        .route("/register", get(register::show).post(register::submit))
        .route("/admin-login", get(admin_login::show).post(admin_login::submit))
        .route("/admin", get(admin::show))
        .route("/admin/products", post(admin::add_product))
        .route("/admin/events", get(admin::events))
        .route("/logout", get(logout::logout))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            AlertKind::Success => "alert-success",
            AlertKind::Error => "alert-error",
        }
    }
}

/// Header, alerts and footer shared by every page.
#[derive(Debug, Clone)]
pub struct Shell {
    pub session: Session,
    pub title: String,
    pub links: Vec<NavLink>,
    pub alerts: Vec<Alert>,
}

impl Shell {
    pub fn new(session: Session, title: impl Into<String>, path: &str) -> Self {
        Self {
            session,
            title: title.into(),
            links: nav_links(&session, path),
            alerts: Vec::new(),
        }
    }

    pub fn with_alerts(mut self, alerts: impl IntoIterator<Item = Alert>) -> Self {
        self.alerts.extend(alerts);
        self
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }
}

/// Header links for the visitor's role.
pub fn nav_links(session: &Session, path: &str) -> Vec<NavLink> {
    let mut links: Vec<(&'static str, &'static str)> = vec![("/", "Home"), ("/services", "Services")];
    if session.is_logged_in() {
        links.extend([
            ("/shop", "Shop"),
            ("/booking", "Booking"),
            ("/dashboard", "Dashboard"),
        ]);
        if session.is_admin() {
            links.push(("/admin", "Admin"));
        }
        links.push(("/logout", "Logout"));
    } else {
        links.extend([("/login", "Login"), ("/register", "Register")]);
    }

    links
        .into_iter()
        .map(|(href, label)| NavLink {
            href,
            label,
            active: href == path,
        })
        .collect()
}

pub fn render<T: Template>(template: T) -> Response {
    render_with_status(StatusCode::OK, template)
}

pub fn render_with_status<T: Template>(status: StatusCode, template: T) -> Response {
    match template.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "template render failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>Something went wrong</h1>".to_string()),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    fn labels(role: Role) -> Vec<&'static str> {
        nav_links(&Session::new(role), "/").iter().map(|l| l.label).collect()
    }

    #[test]
    fn logged_out_visitors_see_login_and_register() {
        assert_eq!(labels(Role::None), ["Home", "Services", "Login", "Register"]);
    }

    #[test]
    fn customers_see_store_links_and_logout() {
        assert_eq!(
            labels(Role::User),
            ["Home", "Services", "Shop", "Booking", "Dashboard", "Logout"]
        );
    }

    #[test]
    fn admins_also_see_the_admin_link() {
        assert_eq!(
            labels(Role::Admin),
            ["Home", "Services", "Shop", "Booking", "Dashboard", "Admin", "Logout"]
        );
    }

    #[test]
    fn current_path_is_marked_active() {
        let links = nav_links(&Session::new(Role::User), "/shop");
        let active: Vec<_> = links.iter().filter(|l| l.active).map(|l| l.href).collect();
        assert_eq!(active, ["/shop"]);
    }
}
