//! Endpoint configuration loading.

use crate::config::discovery::FileSdConfig;
use crate::config::error::ConfigResult;
use crate::config::schema::{EndpointGroup, EndpointMode, RawEndpointGroup, TlsConfiguration};
use crate::config::validation::{check_strict_discovery, check_unique_endpoints, resolve_modes};

/// Merge the endpoint document with the flag-supplied endpoints.
///
/// The result holds the document's groups in order, then a default-mode
/// group for `endpoint_addrs` / `file_sd_config` (if either is given), then
/// a strict group for `strict_endpoint_addrs` (if any). Both synthesized
/// groups use `tls_config`.
///
/// # Errors
///
/// Stops at the first of, in this order:
/// - the document is not valid YAML or has unknown keys
/// - a document group has a mode other than `""` or `"strict"`
/// - a strict document group lists `endpoints_sd_files`
/// - an address appears more than once across all groups
pub fn load_config(
    document: &[u8],
    endpoint_addrs: &[String],
    strict_endpoint_addrs: &[String],
    file_sd_config: Option<&FileSdConfig>,
    tls_config: &TlsConfiguration,
) -> ConfigResult<Vec<EndpointGroup>> {
    let mut groups = if document.is_empty() {
        Vec::new()
    } else {
        decode_groups(document)?
    };

    if !endpoint_addrs.is_empty() || file_sd_config.is_some() {
        tracing::debug!(
            endpoints = endpoint_addrs.len(),
            sd_files = file_sd_config.is_some(),
            "Adding flag endpoint group"
        );
        groups.push(EndpointGroup {
            tls_config: tls_config.clone(),
            endpoints: endpoint_addrs.to_vec(),
            endpoints_sd: file_sd_config.cloned().into_iter().collect(),
            ..Default::default()
        });
    }

    if !strict_endpoint_addrs.is_empty() {
        tracing::debug!(
            endpoints = strict_endpoint_addrs.len(),
            "Adding strict flag endpoint group"
        );
        groups.push(EndpointGroup {
            tls_config: tls_config.clone(),
            endpoints: strict_endpoint_addrs.to_vec(),
            mode: EndpointMode::Strict,
            ..Default::default()
        });
    }

    check_unique_endpoints(&groups)?;

    tracing::info!(
        groups = groups.len(),
        endpoints = groups.iter().map(|group| group.endpoints.len()).sum::<usize>(),
        "Endpoint configuration loaded"
    );

    Ok(groups)
}

/// Strict-decode the document and run the per-group checks.
fn decode_groups(document: &[u8]) -> ConfigResult<Vec<EndpointGroup>> {
    let raw: Option<Vec<RawEndpointGroup>> = serde_yaml::from_slice(document)?;

    let groups = resolve_modes(raw.unwrap_or_default())?;
    check_strict_discovery(&groups)?;

    Ok(groups)
}
