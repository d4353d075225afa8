//! Error types.

/// Error enumerates the possible dnsprofile error states.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when a profile document can't be encoded as an XML property list.
    ///
    /// Nothing is written to the response body when this occurs.
    #[error("plist serialization failed: {0}")]
    Serialization(#[from] plist::Error),

    /// Returned when the request carries neither a readable `Host` header nor a URI authority.
    /// Forwarding headers (`Forwarded`, `X-Forwarded-Host`) are never consulted.
    #[error("request host is missing")]
    MissingHost,

    /// Returned when the request carries an empty host. The host is used verbatim as the
    /// resolver address in the generated profile, so there is nothing to point a device at.
    #[error("request host is empty")]
    EmptyHost,

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when [trying to load a `Config`][crate::config::Config::try_from_file] fails
    /// due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),
}
