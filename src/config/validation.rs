//! Endpoint group validation.
//!
//! # Responsibilities
//! - Resolve every decoded mode string into an [`EndpointMode`]
//! - Reject discovery sources on strict groups
//! - Enforce that each endpoint address appears once across all groups
//!
//! # Design Decisions
//! - Each check is a separate pass over the whole set, never interleaved per group
//! - First failure wins; no partial results
//! - Pure functions over slices, no state kept between calls

use std::collections::HashSet;

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::schema::{EndpointGroup, EndpointMode, RawEndpointGroup};

/// Converts decoded groups into typed groups, failing on the first unknown mode.
pub(crate) fn resolve_modes(raw: Vec<RawEndpointGroup>) -> ConfigResult<Vec<EndpointGroup>> {
    raw.into_iter().map(EndpointGroup::try_from).collect()
}

/// Strict groups must be fully static.
pub fn check_strict_discovery(groups: &[EndpointGroup]) -> ConfigResult<()> {
    match groups
        .iter()
        .find(|group| group.mode == EndpointMode::Strict && !group.endpoints_sd.is_empty())
    {
        Some(group) => Err(ConfigError::StrictModeDiscovery {
            group: group.name.clone(),
        }),
        None => Ok(()),
    }
}

/// Scans every group's static addresses in order and reports the first repeat.
///
/// Discovery sources are not resolved here, so only literal addresses count.
pub fn check_unique_endpoints(groups: &[EndpointGroup]) -> ConfigResult<()> {
    let mut seen = HashSet::new();

    for address in groups.iter().flat_map(|group| &group.endpoints) {
        if !seen.insert(address.as_str()) {
            return Err(ConfigError::DuplicateEndpoint {
                address: address.clone(),
            });
        }
    }

    Ok(())
}
