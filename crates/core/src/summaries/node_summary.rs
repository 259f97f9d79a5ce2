//! Node-level thermal aggregate.
//!
//! Holds the node identity, its [`ThermalVector`] of mean scores and one
//! [`DimensionProfile`] slot per dimension. The aggregate is assembled and
//! rendered locally; only the nested profiles are ever transported.

use std::sync::Arc;

use crate::error::CoreError;
use crate::thermal::{ThermalDimension, ThermalVector};
use crate::types::{SqlColumn, SqlType, SqlValue};

use super::{DimensionProfile, FlowUnitMessage, SharedSummary, SummaryBase, SummaryMessage};

/// Column holding the node identifier.
pub const NODE_ID_COL_NAME: &str = "node_id";

/// Column holding the node's host address.
pub const HOST_ADDRESS_COL_NAME: &str = "host_address";

/// Full thermal summary of a single node.
#[derive(Debug, Clone)]
pub struct NodeThermalSummary {
    node_id: String,
    host_address: String,
    thermal_vector: ThermalVector,
    profiles: [Option<Arc<DimensionProfile>>; ThermalDimension::COUNT],
}

impl NodeThermalSummary {
    pub const TABLE_NAME: &'static str = "NodeThermalSummary";

    pub fn new(node_id: impl Into<String>, host_address: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            host_address: host_address.into(),
            thermal_vector: ThermalVector::new(),
            profiles: Default::default(),
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn host_address(&self) -> &str {
        &self.host_address
    }

    pub fn thermal_vector(&self) -> &ThermalVector {
        &self.thermal_vector
    }

    /// Every slot in ordinal order, empty ones included.
    pub fn dimension_profiles(&self) -> &[Option<Arc<DimensionProfile>>] {
        &self.profiles
    }

    /// Install `profile` in its dimension's slot and record its mean.
    ///
    /// Replaces any profile previously installed for the same dimension.
    pub fn update_dimension_profile(&mut self, profile: Arc<DimensionProfile>) {
        let dimension = profile.dimension();
        self.thermal_vector
            .update_for_dimension(dimension, profile.mean_value());
        if self.profiles[dimension.ordinal()]
            .replace(profile)
            .is_some()
        {
            tracing::debug!(
                node_id = %self.node_id,
                %dimension,
                "Replaced existing dimension profile"
            );
        }
    }

    /// Populated profiles in ordinal order.
    pub fn populated_profiles(&self) -> Vec<Arc<DimensionProfile>> {
        self.profiles.iter().flatten().cloned().collect()
    }
}

impl SummaryBase for NodeThermalSummary {
    fn table_name(&self) -> &'static str {
        Self::TABLE_NAME
    }

    fn sql_schema(&self) -> Vec<SqlColumn> {
        let mut schema = Vec::with_capacity(2 + ThermalDimension::COUNT);
        schema.push(SqlColumn::new(NODE_ID_COL_NAME, SqlType::Text));
        schema.push(SqlColumn::new(HOST_ADDRESS_COL_NAME, SqlType::Text));
        schema.extend(
            ThermalDimension::ALL
                .iter()
                .map(|d| SqlColumn::new(d.name(), SqlType::SmallInt)),
        );
        schema
    }

    fn sql_value(&self) -> Vec<SqlValue> {
        let mut values = Vec::with_capacity(2 + ThermalDimension::COUNT);
        values.push(SqlValue::Text(self.node_id.clone()));
        values.push(SqlValue::Text(self.host_address.clone()));
        values.extend(
            self.thermal_vector
                .iter()
                .map(|(_, value)| SqlValue::from(value.map(|v| v.points()))),
        );
        values
    }

    fn to_json(&self) -> serde_json::Value {
        let mut obj = self.thermal_vector.to_json_map();
        for nested in self.nested_summaries() {
            obj.insert(nested.table_name().to_string(), nested.to_json());
        }
        serde_json::Value::Object(obj)
    }

    fn nested_summaries(&self) -> Vec<SharedSummary> {
        self.populated_profiles()
            .into_iter()
            .map(|p| p as SharedSummary)
            .collect()
    }

    fn build_summary_message(&self) -> Result<SummaryMessage, CoreError> {
        tracing::error!(
            node_id = %self.node_id,
            "Refusing to build a wire message for a node thermal summary"
        );
        Err(CoreError::NotTransportable {
            summary: Self::TABLE_NAME,
        })
    }

    fn build_summary_message_and_add_to_flow_unit(
        &self,
        _flow_unit: &mut FlowUnitMessage,
    ) -> Result<(), CoreError> {
        tracing::error!(
            node_id = %self.node_id,
            "Refusing to add a node thermal summary to a flow unit"
        );
        Err(CoreError::NotTransportable {
            summary: Self::TABLE_NAME,
        })
    }
}
