//! Mock accounts: the role cookie is the whole session.

use crate::{
    config::AppConfig,
    dto::auth::{LoginRequest, RegisterRequest},
    error::{AppError, AppResult},
    models::UserProfile,
    session::Role,
    state::AppState,
};

/// Any non-empty email and password sign in as a customer.
pub fn login(request: &LoginRequest) -> AppResult<Role> {
    let mut errors = Vec::new();
    if request.email.trim().is_empty() {
        errors.push("Email is required".to_string());
    }
    if request.password.is_empty() {
        errors.push("Password is required".to_string());
    }
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    tracing::info!(email = %request.email.trim(), "user signed in");
    Ok(Role::User)
}

/// Only the configured admin pair is accepted.
pub fn admin_login(config: &AppConfig, request: &LoginRequest) -> AppResult<Role> {
    // Trimmed like the browser's `type="email"` input; the password is compared as typed.
    if request.email.trim() == config.admin_email && request.password == config.admin_password {
        tracing::info!(email = %config.admin_email, "admin signed in");
        Ok(Role::Admin)
    } else {
        tracing::warn!(email = %request.email.trim(), "admin sign-in rejected");
        Err(AppError::Unauthorized)
    }
}

/// Checks that the passwords match. Nothing is stored.
pub fn register(request: &RegisterRequest) -> AppResult<()> {
    if request.password != request.confirm_password {
        return Err(AppError::Validation(vec![
            "Passwords don't match!".to_string(),
        ]));
    }
    tracing::info!(email = %request.email.trim(), name = %request.name.trim(), "registration attempt");
    Ok(())
}

pub async fn user_profile(state: &AppState) -> AppResult<UserProfile> {
    let store = state.store.clone();
    let profile = state
        .queries
        .user_data
        .fetch(|| async move { store.user_profile().await })
        .await?;
    Ok(profile)
}
