use askama::Template;
use axum::{extract::State, response::Response};

use super::{Shell, render};
use crate::{
    middleware::auth::RequireUser, models::UserProfile, services::account_service,
    state::AppState,
};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub shell: Shell,
    pub profile: Option<UserProfile>,
}

pub async fn show(State(state): State<AppState>, RequireUser(session): RequireUser) -> Response {
    let profile = account_service::user_profile(&state).await.ok();
    render(DashboardTemplate {
        shell: Shell::new(session, "Dashboard", "/dashboard"),
        profile,
    })
}
