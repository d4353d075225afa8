use crate::api::api_error::APIError;
use crate::api::model::RequestHost;
use crate::api::server::AppState;
use crate::error::Error;
use crate::mobileconfig::{to_xml, DnsSettings, MobileConfig};
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub(super) const DOH_PATH: &str = "/apple/doh.mobileconfig";
pub(super) const DOT_PATH: &str = "/apple/dot.mobileconfig";

const XML_CONTENT_TYPE: &str = "application/xml";

pub(super) fn new(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(health_check))
        .route(DOH_PATH, get(doh_profile))
        .route(DOT_PATH, get(dot_profile))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.api_timeout))
        .with_state(state)
}

#[allow(clippy::unused_async)]
async fn health_check() -> impl IntoResponse {
    Json(json!({"ok":"healthy"}))
}

#[allow(clippy::unused_async)]
async fn doh_profile(
    State(state): State<AppState>,
    RequestHost(host): RequestHost,
) -> Result<Response, APIError> {
    profile_response(&state, &host, DnsSettings::https(&host), to_xml::<MobileConfig>)
}

#[allow(clippy::unused_async)]
async fn dot_profile(
    State(state): State<AppState>,
    RequestHost(host): RequestHost,
) -> Result<Response, APIError> {
    profile_response(&state, &host, DnsSettings::tls(&host), to_xml::<MobileConfig>)
}

fn profile_response<F>(
    state: &AppState,
    host: &str,
    settings: DnsSettings,
    encode: F,
) -> Result<Response, APIError>
where
    F: FnOnce(&MobileConfig) -> Result<Vec<u8>, Error>,
{
    let protocol = settings.protocol();
    tracing::debug!("building DNS over {protocol} profile for \"{host}\"");
    let doc = MobileConfig::new(host, settings, &state.config.profile);
    // Encoded in full before the response exists, so a failure never leaves a partial body.
    let body = encode(&doc)?;
    Ok(xml_response(body))
}

fn xml_response(body: Vec<u8>) -> Response {
    ([(CONTENT_TYPE, XML_CONTENT_TYPE)], body).into_response()
}
