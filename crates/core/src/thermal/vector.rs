//! Per-node vector of mean scores, one slot per dimension.

use super::{NormalizedValue, ThermalDimension};

/// Maps every [`ThermalDimension`] to an optional [`NormalizedValue`].
///
/// The slot count is fixed; mutation only ever overwrites a slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThermalVector {
    values: [Option<NormalizedValue>; ThermalDimension::COUNT],
}

impl ThermalVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the stored value for `dimension`.
    pub fn update_for_dimension(&mut self, dimension: ThermalDimension, value: NormalizedValue) {
        self.values[dimension.ordinal()] = Some(value);
    }

    /// Current value for `dimension`, or `None` if it was never set.
    pub fn get_for_dimension(&self, dimension: ThermalDimension) -> Option<NormalizedValue> {
        self.values[dimension.ordinal()]
    }

    /// `(dimension, value)` pairs in ordinal order, absent slots included.
    pub fn iter(&self) -> impl Iterator<Item = (ThermalDimension, Option<NormalizedValue>)> + '_ {
        ThermalDimension::ALL
            .into_iter()
            .map(move |d| (d, self.get_for_dimension(d)))
    }

    /// `{ "<dimension name>": points | null, ... }` for every dimension.
    pub fn to_json_map(&self) -> serde_json::Map<String, serde_json::Value> {
        self.iter()
            .map(|(dim, value)| {
                let json = value.map_or(serde_json::Value::Null, |v| v.points().into());
                (dim.name().to_string(), json)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nv(points: i16) -> NormalizedValue {
        NormalizedValue::new(points).unwrap()
    }

    #[test]
    fn new_vector_is_fully_absent() {
        let v = ThermalVector::new();
        for dim in ThermalDimension::ALL {
            assert_eq!(v.get_for_dimension(dim), None);
        }
    }

    #[test]
    fn update_overwrites_only_its_slot() {
        let mut v = ThermalVector::new();
        v.update_for_dimension(ThermalDimension::HeapAllocRate, nv(3));
        v.update_for_dimension(ThermalDimension::HeapAllocRate, nv(8));
        assert_eq!(v.get_for_dimension(ThermalDimension::HeapAllocRate), Some(nv(8)));
        assert_eq!(v.get_for_dimension(ThermalDimension::CpuUtilization), None);
        assert_eq!(v.get_for_dimension(ThermalDimension::ShardSizeInBytes), None);
    }

    #[test]
    fn json_map_renders_absent_as_null() {
        let mut v = ThermalVector::new();
        v.update_for_dimension(ThermalDimension::CpuUtilization, nv(5));
        assert_eq!(
            serde_json::Value::Object(v.to_json_map()),
            serde_json::json!({
                "CPU_Utilization": 5,
                "Heap_AllocRate": null,
                "Shard_Size_In_Bytes": null,
            })
        );
    }
}
