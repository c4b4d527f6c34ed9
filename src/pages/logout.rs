use axum::{extract::State, response::Redirect};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    session::{Session, clear_role},
    state::AppState,
};

/// Clears the role whatever it was and goes home.
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    tracing::info!(role = %session.role, "signed out");
    (clear_role(jar, state.config.cookie_secure), Redirect::to("/"))
}
