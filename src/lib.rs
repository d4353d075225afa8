//! dnsprofile
//!
//! Serves Apple [configuration profiles] that point macOS and iOS devices at an encrypted DNS
//! resolver, using DNS-over-HTTPS or DNS-over-TLS. The resolver address is the host each
//! profile was requested from.
//!
//! [configuration profiles]: https://developer.apple.com/documentation/devicemanagement/dnssettings
//!
#![warn(clippy::pedantic)]

pub mod api;
pub mod config;
pub mod error;
pub mod mobileconfig;

pub use api::new as new_http;
pub use config::{Config, Shared};
pub use mobileconfig::{DnsProtocol, DnsSettings, MobileConfig, ProfileText};
