//! Summary capability contract and the concrete summaries built on it.
//!
//! Every summary can describe itself as a table row and as a JSON tree.
//! Only transportable summaries can also produce a wire message; local-only
//! aggregates return [`CoreError::NotTransportable`] from the wire hooks.

pub mod dimension_profile;
pub mod node_summary;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{SqlColumn, SqlValue};

pub use dimension_profile::{DimensionProfile, ResourceUnitScore};
pub use node_summary::NodeThermalSummary;

/// Shared handle to a nested summary of unknown concrete type.
pub type SharedSummary = Arc<dyn SummaryBase + Send + Sync>;

/// Capabilities common to all summaries.
pub trait SummaryBase {
    /// Stable identifier of this summary's row shape.
    fn table_name(&self) -> &'static str;

    /// Ordered column definitions of the row.
    fn sql_schema(&self) -> Vec<SqlColumn>;

    /// Row values, positionally aligned with [`SummaryBase::sql_schema`].
    fn sql_value(&self) -> Vec<SqlValue>;

    /// Tree rendering of the summary.
    fn to_json(&self) -> serde_json::Value;

    /// Summaries nested under this one, in a stable order.
    fn nested_summaries(&self) -> Vec<SharedSummary> {
        Vec::new()
    }

    /// Build the wire message for this summary.
    fn build_summary_message(&self) -> Result<SummaryMessage, CoreError>;

    /// Build the wire message and append it to `flow_unit`.
    fn build_summary_message_and_add_to_flow_unit(
        &self,
        flow_unit: &mut FlowUnitMessage,
    ) -> Result<(), CoreError> {
        let message = self.build_summary_message()?;
        flow_unit.summaries.push(message);
        Ok(())
    }
}

/// Wire envelope for one transportable summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMessage {
    pub table_name: String,
    pub body: serde_json::Value,
}

/// A batch of summary messages produced by one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowUnitMessage {
    pub node_id: String,
    pub summaries: Vec<SummaryMessage>,
}

impl FlowUnitMessage {
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            summaries: Vec::new(),
        }
    }
}
