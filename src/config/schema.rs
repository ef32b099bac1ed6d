//! Endpoint group schema.
//!
//! The document is decoded in two layers. [`RawEndpointGroup`] mirrors the
//! YAML one-to-one and rejects unknown keys; [`EndpointGroup`] is the typed,
//! validated form handed back to callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::config::discovery::FileSdConfig;
use crate::config::error::ConfigError;

/// How an endpoint group may be populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EndpointMode {
    /// Static addresses, optionally mixed with discovered ones. Written as `""`.
    #[default]
    Default,
    /// Static addresses only. Written as `"strict"`.
    Strict,
}

impl EndpointMode {
    /// The string form used in the endpoint document.
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointMode::Default => "",
            EndpointMode::Strict => "strict",
        }
    }
}

impl FromStr for EndpointMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(EndpointMode::Default),
            "strict" => Ok(EndpointMode::Strict),
            other => Err(ConfigError::InvalidMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for EndpointMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EndpointMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// TLS material for connecting to a group's endpoints.
///
/// When every field is unset the group is dialed in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TlsConfiguration {
    /// Client certificate identifying this querier to the server (PEM).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_file: Option<String>,

    /// Private key for `cert_file` (PEM).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_file: Option<String>,

    /// CA bundle used to verify the servers (PEM).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_file: Option<String>,

    /// Overrides the hostname verified against the server certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
}

impl TlsConfiguration {
    /// Returns true if any TLS material is configured.
    pub fn is_enabled(&self) -> bool {
        [
            &self.cert_file,
            &self.key_file,
            &self.ca_file,
            &self.server_name,
        ]
        .into_iter()
        .any(|field| field.as_deref().is_some_and(|value| !value.is_empty()))
    }
}

/// A named set of Store API endpoints sharing TLS settings and a mode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EndpointGroup {
    /// Group identifier. Not required to be unique.
    pub name: String,

    /// TLS settings for every endpoint in the group.
    pub tls_config: TlsConfiguration,

    /// Static endpoint addresses, in document order.
    pub endpoints: Vec<String>,

    /// File-based discovery sources resolved later by the querier.
    #[serde(rename = "endpoints_sd_files")]
    pub endpoints_sd: Vec<FileSdConfig>,

    /// Whether discovery sources are allowed alongside the static addresses.
    pub mode: EndpointMode,
}

/// One group exactly as written in the endpoint document.
///
/// Null and missing values are both accepted and mean "empty".
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct RawEndpointGroup {
    name: Option<String>,
    tls_config: Option<TlsConfiguration>,
    endpoints: Option<Vec<String>>,
    endpoints_sd_files: Option<Vec<FileSdConfig>>,
    mode: Option<String>,
}

impl TryFrom<RawEndpointGroup> for EndpointGroup {
    type Error = ConfigError;

    fn try_from(raw: RawEndpointGroup) -> Result<Self, Self::Error> {
        let mode = raw.mode.as_deref().unwrap_or_default().parse()?;

        Ok(EndpointGroup {
            name: raw.name.unwrap_or_default(),
            tls_config: raw.tls_config.unwrap_or_default(),
            endpoints: raw.endpoints.unwrap_or_default(),
            endpoints_sd: raw.endpoints_sd_files.unwrap_or_default(),
            mode,
        })
    }
}
