//! The fixed set of thermal dimensions a node is profiled along.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One axis of resource-pressure measurement.
///
/// The declaration order is the ordinal order used by every projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThermalDimension {
    #[serde(rename = "CPU_Utilization")]
    CpuUtilization,
    #[serde(rename = "Heap_AllocRate")]
    HeapAllocRate,
    #[serde(rename = "Shard_Size_In_Bytes")]
    ShardSizeInBytes,
}

impl ThermalDimension {
    /// Number of known dimensions.
    pub const COUNT: usize = 3;

    /// All dimensions in ordinal order.
    pub const ALL: [ThermalDimension; Self::COUNT] = [
        ThermalDimension::CpuUtilization,
        ThermalDimension::HeapAllocRate,
        ThermalDimension::ShardSizeInBytes,
    ];

    /// Canonical name, used as the column name and JSON key.
    pub fn name(self) -> &'static str {
        match self {
            ThermalDimension::CpuUtilization => "CPU_Utilization",
            ThermalDimension::HeapAllocRate => "Heap_AllocRate",
            ThermalDimension::ShardSizeInBytes => "Shard_Size_In_Bytes",
        }
    }

    pub fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ThermalDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThermalDimension {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| CoreError::UnknownDimension(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_declaration_order() {
        for (i, dim) in ThermalDimension::ALL.iter().enumerate() {
            assert_eq!(dim.ordinal(), i);
        }
    }

    #[test]
    fn parse_round_trips_canonical_name() {
        for dim in ThermalDimension::ALL {
            assert_eq!(dim.name().parse::<ThermalDimension>().unwrap(), dim);
        }
    }

    #[test]
    fn unknown_name_rejected() {
        let err = "Disk_IO".parse::<ThermalDimension>().unwrap_err();
        assert!(err.to_string().contains("Disk_IO"));
    }

    #[test]
    fn serde_uses_canonical_name() {
        let json = serde_json::to_value(ThermalDimension::HeapAllocRate).unwrap();
        assert_eq!(json, serde_json::json!("Heap_AllocRate"));
    }
}
