//! Session role carried in the `userRole` cookie.
//!
//! The role is the only authorization signal the site has. It is read from the
//! cookie on every request and trusted as-is; nothing signs or expires it.

use std::{convert::Infallible, fmt};

use axum::{extract::FromRequestParts, http::HeaderMap, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const ROLE_COOKIE: &str = "userRole";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    None,
    User,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::None, Role::User, Role::Admin];

    /// Unknown values read as [`Role::None`].
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("user") => Role::User,
            Some("admin") => Role::Admin,
            _ => Role::None,
        }
    }

    pub fn as_cookie_value(&self) -> Option<&'static str> {
        match self {
            Role::None => None,
            Role::User => Some("user"),
            Role::Admin => Some("admin"),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_cookie_value().unwrap_or("none"))
    }
}

/// Per-request view of the visitor's session, handed to guards and page views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
}

impl Session {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn from_jar(jar: &CookieJar) -> Self {
        Self::new(Role::parse(jar.get(ROLE_COOKIE).map(|c| c.value())))
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self::from_jar(&CookieJar::from_headers(headers))
    }

    pub fn is_logged_in(&self) -> bool {
        self.role != Role::None
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Session::from_headers(&parts.headers))
    }
}

/// Stores `role` in the jar. Passing [`Role::None`] clears the cookie.
pub fn store_role(jar: CookieJar, role: Role, secure: bool) -> CookieJar {
    match role.as_cookie_value() {
        Some(value) => jar.add(role_cookie(value.to_string(), secure)),
        None => clear_role(jar, secure),
    }
}

pub fn clear_role(jar: CookieJar, secure: bool) -> CookieJar {
    jar.remove(role_cookie(String::new(), secure))
}

fn role_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((ROLE_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}
