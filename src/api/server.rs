use crate::api::routes;
use crate::config::Shared;
use axum::Router;
use std::future::Future;

#[derive(Clone)]
pub(super) struct AppState {
    pub config: Shared,
}

/// Build the HTTP [`Router`] serving the profile endpoints for `config`.
pub fn router(config: Shared) -> Router {
    routes::new(AppState { config })
}

/// Serve the HTTP API on [`Config::api_bind_addr`][crate::config::Config::api_bind_addr] until
/// `shutdown` completes. In-flight requests are allowed to finish.
pub fn new(
    config: Shared,
    shutdown: impl Future<Output = ()>,
) -> impl Future<Output = hyper::Result<()>> {
    let addr = config.api_bind_addr;
    axum::Server::bind(&addr)
        .serve(router(config).into_make_service())
        .with_graceful_shutdown(shutdown)
}
