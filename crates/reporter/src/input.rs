//! Loading dimension profiles and assembling the node summary.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use nodetemp_core::summaries::{DimensionProfile, NodeThermalSummary};
use serde::Deserialize;

/// On-disk shape of the profile input file.
#[derive(Debug, Deserialize)]
pub struct ProfileInput {
    pub profiles: Vec<DimensionProfile>,
}

pub fn parse_profiles(raw: &str) -> anyhow::Result<Vec<DimensionProfile>> {
    let input: ProfileInput =
        serde_json::from_str(raw).context("Invalid dimension profile input")?;
    Ok(input.profiles)
}

pub fn load_profiles(path: &Path) -> anyhow::Result<Vec<DimensionProfile>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_profiles(&raw)
}

/// Build the node summary from `profiles`, later entries for a dimension
/// replacing earlier ones.
pub fn assemble(
    node_id: &str,
    host_address: &str,
    profiles: Vec<DimensionProfile>,
) -> NodeThermalSummary {
    let mut summary = NodeThermalSummary::new(node_id, host_address);
    for profile in profiles {
        tracing::debug!(dimension = %profile.dimension(), "Applying dimension profile");
        summary.update_dimension_profile(Arc::new(profile));
    }
    summary
}
