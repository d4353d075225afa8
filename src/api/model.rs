use crate::api::api_error::APIError;
use crate::error::Error;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::HOST;
use axum::http::request::Parts;

/// The non-empty host an inbound request was addressed to.
///
/// Taken from the `Host` header, or the request URI authority when there is no header (e.g.
/// HTTP/2 `:authority`). Forwarding headers are ignored: the host ends up as the resolver
/// address of the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RequestHost(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RequestHost
where
    S: Send + Sync,
{
    type Rejection = APIError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let host = match parts.headers.get(HOST) {
            Some(value) => value.to_str().map_err(|_| Error::MissingHost)?,
            None => parts
                .uri
                .authority()
                .map(axum::http::uri::Authority::as_str)
                .ok_or(Error::MissingHost)?,
        };
        if host.is_empty() {
            return Err(Error::EmptyHost.into());
        }
        Ok(RequestHost(host.to_string()))
    }
}
