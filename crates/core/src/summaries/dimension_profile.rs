//! Per-dimension breakdown of a node's thermal state.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::thermal::{NormalizedValue, ThermalDimension};
use crate::types::{SqlColumn, SqlType, SqlValue};

use super::{SummaryBase, SummaryMessage};

/// Score of a single resource unit (a shard) along one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUnitScore {
    pub index_name: String,
    pub shard_id: i32,
    pub score: NormalizedValue,
}

/// Mean score and per-unit detail for one dimension on one node.
///
/// Immutable once built; the node aggregate shares it by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionProfile {
    dimension: ThermalDimension,
    mean_value: NormalizedValue,
    total_usage: f64,
    #[serde(default)]
    entries: Vec<ResourceUnitScore>,
}

impl DimensionProfile {
    pub fn new(
        dimension: ThermalDimension,
        mean_value: NormalizedValue,
        total_usage: f64,
        entries: Vec<ResourceUnitScore>,
    ) -> Self {
        Self {
            dimension,
            mean_value,
            total_usage,
            entries,
        }
    }

    pub fn dimension(&self) -> ThermalDimension {
        self.dimension
    }

    pub fn mean_value(&self) -> NormalizedValue {
        self.mean_value
    }

    pub fn total_usage(&self) -> f64 {
        self.total_usage
    }

    pub fn entries(&self) -> &[ResourceUnitScore] {
        &self.entries
    }
}

impl SummaryBase for DimensionProfile {
    /// One row shape per dimension so nested JSON keys never collide.
    fn table_name(&self) -> &'static str {
        match self.dimension {
            ThermalDimension::CpuUtilization => "CPU_UtilizationSummary",
            ThermalDimension::HeapAllocRate => "Heap_AllocRateSummary",
            ThermalDimension::ShardSizeInBytes => "Shard_Size_In_BytesSummary",
        }
    }

    fn sql_schema(&self) -> Vec<SqlColumn> {
        vec![
            SqlColumn::new("dimension", SqlType::Text),
            SqlColumn::new("mean_value", SqlType::SmallInt),
            SqlColumn::new("total_usage", SqlType::Double),
            SqlColumn::new("num_entries", SqlType::BigInt),
        ]
    }

    fn sql_value(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.dimension.name().to_string()),
            SqlValue::SmallInt(self.mean_value.points()),
            SqlValue::Double(self.total_usage),
            // A Vec length never exceeds isize::MAX, so this is lossless.
            SqlValue::BigInt(self.entries.len() as i64),
        ]
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "dimension": self.dimension.name(),
            "mean_value": self.mean_value.points(),
            "total_usage": self.total_usage,
            "num_entries": self.entries.len(),
            "entries": self
                .entries
                .iter()
                .map(|e| serde_json::json!({
                    "index_name": e.index_name,
                    "shard_id": e.shard_id,
                    "score": e.score.points(),
                }))
                .collect::<Vec<_>>(),
        })
    }

    fn build_summary_message(&self) -> Result<SummaryMessage, CoreError> {
        Ok(SummaryMessage {
            table_name: self.table_name().to_string(),
            body: self.to_json(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summaries::FlowUnitMessage;

    fn sample() -> DimensionProfile {
        DimensionProfile::new(
            ThermalDimension::HeapAllocRate,
            NormalizedValue::new(4).unwrap(),
            512.5,
            vec![ResourceUnitScore {
                index_name: "logs".to_string(),
                shard_id: 2,
                score: NormalizedValue::new(6).unwrap(),
            }],
        )
    }

    #[test]
    fn schema_and_row_align() {
        let p = sample();
        assert_eq!(p.sql_schema().len(), p.sql_value().len());
        assert_eq!(p.sql_schema()[3].sql_type, SqlType::BigInt);
        assert_eq!(
            p.sql_value(),
            vec![
                SqlValue::Text("Heap_AllocRate".to_string()),
                SqlValue::SmallInt(4),
                SqlValue::Double(512.5),
                SqlValue::BigInt(1),
            ]
        );
    }

    #[test]
    fn json_includes_entries() {
        let json = sample().to_json();
        assert_eq!(json["dimension"], "Heap_AllocRate");
        assert_eq!(json["mean_value"], 4);
        assert_eq!(json["num_entries"], 1);
        assert_eq!(json["entries"][0]["index_name"], "logs");
        assert_eq!(json["entries"][0]["score"], 6);
    }

    #[test]
    fn table_name_differs_per_dimension() {
        let cpu = DimensionProfile::new(
            ThermalDimension::CpuUtilization,
            NormalizedValue::new(1).unwrap(),
            1.0,
            Vec::new(),
        );
        assert_ne!(cpu.table_name(), sample().table_name());
    }

    #[test]
    fn profile_is_transportable() {
        let p = sample();
        let mut flow_unit = FlowUnitMessage::new("n1");
        p.build_summary_message_and_add_to_flow_unit(&mut flow_unit)
            .unwrap();
        assert_eq!(flow_unit.summaries.len(), 1);
        assert_eq!(flow_unit.summaries[0].table_name, "Heap_AllocRateSummary");
        assert_eq!(flow_unit.summaries[0].body, p.to_json());
    }
}
