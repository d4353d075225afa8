//! Apple configuration profiles for encrypted DNS.
//!
//! A profile is an XML [property list] holding a single `com.apple.dnsSettings.managed`
//! payload. Installing it makes macOS Big Sur and iOS 14 (or newer) devices resolve names
//! with DNS-over-HTTPS or DNS-over-TLS against the configured server.
//!
//! Every call to [`build`] generates fresh random identifiers, so two profiles built from the
//! same input differ only in their `PayloadUUID` and `PayloadIdentifier` values.
//!
//! [property list]: https://developer.apple.com/documentation/devicemanagement/dnssettings

use crate::error::Error;
use plist::XmlWriteOptions;
use serde::Serialize;
use uuid::Uuid;

mod model;

pub use model::{DnsProtocol, DnsSettings, MobileConfig, PayloadContent, ProfileText};

/// The identifiers of one profile. All three are random and never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ProfileIds {
    content: String,
    identifier: String,
    profile: String,
}

impl ProfileIds {
    fn generate() -> Self {
        ProfileIds {
            content: Uuid::new_v4().to_string(),
            identifier: Uuid::new_v4().to_string(),
            profile: Uuid::new_v4().to_string(),
        }
    }
}

impl MobileConfig {
    /// Assemble a profile for `host` with freshly generated identifiers.
    #[must_use]
    pub fn new(host: &str, settings: DnsSettings, text: &ProfileText) -> Self {
        Self::with_ids(host, settings, text, ProfileIds::generate())
    }

    fn with_ids(host: &str, settings: DnsSettings, text: &ProfileText, ids: ProfileIds) -> Self {
        let content = PayloadContent {
            name: format!("{host} DNS over {}", settings.protocol()),
            payload_description: text.payload_description.clone(),
            payload_display_name: text.display_name.clone(),
            payload_identifier: format!("{}.{}", model::DNS_SETTINGS_PAYLOAD_TYPE, ids.content),
            payload_type: model::DNS_SETTINGS_PAYLOAD_TYPE.to_string(),
            payload_uuid: ids.content,
            payload_version: model::PAYLOAD_VERSION,
            dns_settings: settings,
        };
        MobileConfig {
            payload_content: vec![content],
            payload_description: text.description.clone(),
            payload_display_name: text.display_name.clone(),
            payload_identifier: ids.identifier,
            payload_removal_disallowed: false,
            payload_type: model::CONFIGURATION_PAYLOAD_TYPE.to_string(),
            payload_uuid: ids.profile,
            payload_version: model::PAYLOAD_VERSION,
        }
    }
}

/// Build a profile for `host` and serialize it as an XML property list.
///
/// `host` is used verbatim, both in the payload name and (through `settings`) as the server
/// address.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if the document can't be encoded.
pub fn build(host: &str, settings: DnsSettings, text: &ProfileText) -> Result<Vec<u8>, Error> {
    to_xml(&MobileConfig::new(host, settings, text))
}

/// Serialize `doc` as an XML property list, indented with one tab per nesting level.
///
/// The whole document is encoded in memory; no partial output is returned on failure.
///
/// # Errors
///
/// Returns [`Error::Serialization`] if `doc` can't be represented as a property list.
pub fn to_xml<T: Serialize>(doc: &T) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    plist::to_writer_xml_with_options(&mut buf, doc, &XmlWriteOptions::default().indent(b'\t', 1))?;
    Ok(buf)
}
