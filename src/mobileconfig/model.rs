use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub(super) const DNS_SETTINGS_PAYLOAD_TYPE: &str = "com.apple.dnsSettings.managed";
pub(super) const CONFIGURATION_PAYLOAD_TYPE: &str = "Configuration";
pub(super) const PAYLOAD_VERSION: u32 = 1;

/// Encrypted DNS transport configured by a profile.
///
/// Encoded as the plain `DNSProtocol` string. Property lists have no native enum form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnsProtocol {
    /// DNS-over-HTTPS, configured by `ServerURL`.
    Https,
    /// DNS-over-TLS, configured by `ServerName`.
    Tls,
}

impl DnsProtocol {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DnsProtocol::Https => "HTTPS",
            DnsProtocol::Tls => "TLS",
        }
    }
}

impl fmt::Display for DnsProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DnsProtocol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DnsProtocol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let protocol = String::deserialize(deserializer)?;
        match protocol.as_str() {
            "HTTPS" => Ok(DnsProtocol::Https),
            "TLS" => Ok(DnsProtocol::Tls),
            other => Err(de::Error::unknown_variant(other, &["HTTPS", "TLS"])),
        }
    }
}

/// The `DNSSettings` dictionary of a `com.apple.dnsSettings.managed` payload.
///
/// Exactly one of `ServerURL` and `ServerName` is set, depending on the protocol. The unused
/// one is left out of the serialized document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DnsSettings {
    #[serde(rename = "DNSProtocol")]
    protocol: DnsProtocol,
    #[serde(
        rename = "ServerURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    server_url: Option<String>,
    #[serde(
        rename = "ServerName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    server_name: Option<String>,
}

impl DnsSettings {
    /// DNS-over-HTTPS settings pointing at `https://<host>`.
    #[must_use]
    pub fn https(host: &str) -> Self {
        DnsSettings {
            protocol: DnsProtocol::Https,
            server_url: Some(format!("https://{host}")),
            server_name: None,
        }
    }

    /// DNS-over-TLS settings pointing at `host`.
    #[must_use]
    pub fn tls(host: &str) -> Self {
        DnsSettings {
            protocol: DnsProtocol::Tls,
            server_url: None,
            server_name: Some(host.to_string()),
        }
    }

    #[must_use]
    pub fn protocol(&self) -> DnsProtocol {
        self.protocol
    }

    #[must_use]
    pub fn server_url(&self) -> Option<&str> {
        self.server_url.as_deref()
    }

    #[must_use]
    pub fn server_name(&self) -> Option<&str> {
        self.server_name.as_deref()
    }
}

/// Human-readable strings shown by the device when installing a profile.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ProfileText {
    /// `PayloadDisplayName` of both the profile and its DNS payload.
    pub display_name: String,
    /// Top-level `PayloadDescription`.
    pub description: String,
    /// `PayloadDescription` of the DNS payload.
    pub payload_description: String,
}

impl Default for ProfileText {
    fn default() -> Self {
        ProfileText {
            display_name: "Encrypted DNS".to_string(),
            description: "Adds an encrypted DNS resolver to macOS Big Sur and iOS 14 or newer systems"
                .to_string(),
            payload_description: "Configures device to use an encrypted DNS resolver".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PayloadContent {
    pub name: String,
    pub payload_description: String,
    pub payload_display_name: String,
    pub payload_identifier: String,
    pub payload_type: String,
    #[serde(rename = "PayloadUUID")]
    pub payload_uuid: String,
    pub payload_version: u32,
    #[serde(rename = "DNSSettings")]
    pub dns_settings: DnsSettings,
}

/// A configuration profile wrapping a single DNS settings payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct MobileConfig {
    pub payload_content: Vec<PayloadContent>,
    pub payload_description: String,
    pub payload_display_name: String,
    pub payload_identifier: String,
    pub payload_removal_disallowed: bool,
    pub payload_type: String,
    #[serde(rename = "PayloadUUID")]
    pub payload_uuid: String,
    pub payload_version: u32,
}
