#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use electropro::{config::AppConfig, routes::create_app, state::AppState};
use tower::ServiceExt;

pub fn app() -> Router {
    create_app(AppState::in_memory(AppConfig::default()))
}

pub fn app_with(state: AppState) -> Router {
    create_app(state)
}

fn with_role(builder: axum::http::request::Builder, role: Option<&str>) -> axum::http::request::Builder {
    match role {
        Some(role) => builder.header(header::COOKIE, format!("userRole={role}")),
        None => builder,
    }
}

pub async fn get(app: &Router, path: &str, role: Option<&str>) -> Response<Body> {
    let request = with_role(Request::get(path), role)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(app: &Router, path: &str, role: Option<&str>, form: &str) -> Response<Body> {
    let request = with_role(Request::post(path), role)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(
    app: &Router,
    path: &str,
    role: Option<&str>,
    json: serde_json::Value,
) -> Response<Body> {
    let request = with_role(Request::post(path), role)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

pub fn set_cookie(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
}
