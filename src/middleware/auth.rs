use axum::{extract::FromRequestParts, http::request::Parts, response::Redirect};

use crate::{
    error::AppError,
    session::{Role, Session},
};

/// Which role a protected route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    User,
    Admin,
}

impl Gate {
    pub fn required_role(self) -> Role {
        match self {
            Gate::User => Role::User,
            Gate::Admin => Role::Admin,
        }
    }

    /// Where a visitor without the role is sent.
    pub fn login_path(self) -> &'static str {
        match self {
            Gate::User => "/login",
            Gate::Admin => "/admin-login",
        }
    }

    /// `Err` carries the redirect target.
    pub fn admit(self, role: Role) -> Result<(), &'static str> {
        if role == self.required_role() {
            Ok(())
        } else {
            Err(self.login_path())
        }
    }
}

/// Page extractor for customer routes; anyone else is redirected to `/login`.
#[derive(Debug, Clone, Copy)]
pub struct RequireUser(pub Session);

/// Page extractor for admin routes; anyone else is redirected to `/admin-login`.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin(pub Session);

fn admit(parts: &Parts, gate: Gate) -> Result<Session, Redirect> {
    let session = Session::from_headers(&parts.headers);
    match gate.admit(session.role) {
        Ok(()) => Ok(session),
        Err(target) => {
            tracing::debug!(path = %parts.uri.path(), role = %session.role, redirect = target, "route guard redirect");
            Err(Redirect::to(target))
        }
    }
}

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        admit(parts, Gate::User).map(RequireUser)
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        admit(parts, Gate::Admin).map(RequireAdmin)
    }
}

pub fn ensure_role(session: &Session, role: Role) -> Result<(), AppError> {
    if session.role != role {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

pub fn ensure_user(session: &Session) -> Result<(), AppError> {
    ensure_role(session, Role::User)
}

pub fn ensure_admin(session: &Session) -> Result<(), AppError> {
    ensure_role(session, Role::Admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_gate_only_admits_users() {
        for role in Role::ALL {
            let expected = if role == Role::User { Ok(()) } else { Err("/login") };
            assert_eq!(Gate::User.admit(role), expected, "role {role}");
        }
    }

    #[test]
    fn admin_gate_only_admits_admins() {
        for role in Role::ALL {
            let expected = if role == Role::Admin { Ok(()) } else { Err("/admin-login") };
            assert_eq!(Gate::Admin.admit(role), expected, "role {role}");
        }
    }

    #[test]
    fn api_checks_forbid_other_roles() {
        assert!(ensure_admin(&Session::new(Role::Admin)).is_ok());
        assert!(matches!(ensure_admin(&Session::new(Role::User)), Err(AppError::Forbidden)));
        assert!(ensure_user(&Session::new(Role::User)).is_ok());
        assert!(matches!(ensure_user(&Session::new(Role::None)), Err(AppError::Forbidden)));
    }
}
