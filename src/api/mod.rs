//! HTTP API serving encrypted DNS configuration profiles.
//!
//! # API Endpoints
//!
//! ## `/healthcheck` (GET)
//!
//!   Returns HTTP 200 (OK) and the JSON body `{"ok":"healthy"}` when the service is operational.
//!
//! ## `/apple/doh.mobileconfig` (GET)
//!
//!   Returns a configuration profile for DNS-over-HTTPS with a `ServerURL` of
//!   `https://<host>`, where `<host>` is the host the request was addressed to.
//!
//! ## `/apple/dot.mobileconfig` (GET)
//!
//!   Returns a configuration profile for DNS-over-TLS with a `ServerName` of `<host>`.
//!
//! Profiles are returned with HTTP 200 (OK) and `Content-Type: application/xml`. See
//! [`crate::mobileconfig`] for the document layout.
//!
//! Requests without a usable host get HTTP 400 (Bad Request). If a profile can't be
//! serialized the response is HTTP 500 (Internal Server Error) with no profile body. Errors
//! use a JSON body of the form:
//!
//! ```json
//! { "error": "request host is empty" }
//! ```

mod api_error;
mod model;
mod routes;
pub mod server;

pub use server::{new, router};
