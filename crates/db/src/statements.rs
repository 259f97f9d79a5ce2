//! SQL text generated from a summary's row shape.
//!
//! Identifiers are double-quoted because summary table and dimension names
//! are mixed case.

use nodetemp_core::summaries::SummaryBase;
use nodetemp_core::types::SqlColumn;

use crate::error::DbError;

/// Quote an identifier, doubling any embedded quote.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn column_list(schema: &[SqlColumn]) -> String {
    schema
        .iter()
        .map(|c| quote_ident(&c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Column in a nested summary's table referencing its parent row.
pub const PARENT_ID_COL_NAME: &str = "parent_id";

/// `CREATE TABLE IF NOT EXISTS` for the summary's row shape.
///
/// Every summary column is nullable; an `id` and `created_at` are added.
/// With `parent_table` set, a non-null `parent_id` referencing that table's
/// `id` is added as well.
pub fn create_table_sql(summary: &dyn SummaryBase, parent_table: Option<&str>) -> String {
    let parent = parent_table
        .map(|t| {
            format!(
                "{} BIGINT NOT NULL REFERENCES {}(id) ON DELETE CASCADE, ",
                quote_ident(PARENT_ID_COL_NAME),
                quote_ident(t)
            )
        })
        .unwrap_or_default();
    let columns = summary
        .sql_schema()
        .iter()
        .map(|c| format!("{} {}", quote_ident(&c.name), c.sql_type.as_pg_type()))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\
         id BIGSERIAL PRIMARY KEY, {parent}{columns}, \
         created_at TIMESTAMPTZ NOT NULL DEFAULT now())",
        quote_ident(summary.table_name())
    )
}

/// Parameterised single-row `INSERT ... RETURNING id` for the summary's
/// row shape.
///
/// With `with_parent`, `parent_id` is the first column and takes `$1`.
pub fn insert_sql(summary: &dyn SummaryBase, with_parent: bool) -> Result<String, DbError> {
    let schema = summary.sql_schema();
    let values = summary.sql_value();
    if schema.len() != values.len() {
        return Err(DbError::RowShapeMismatch {
            table: summary.table_name(),
            columns: schema.len(),
            values: values.len(),
        });
    }
    let mut columns = column_list(&schema);
    let mut param_count = schema.len();
    if with_parent {
        columns = format!("{}, {columns}", quote_ident(PARENT_ID_COL_NAME));
        param_count += 1;
    }
    let placeholders = (1..=param_count)
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!(
        "INSERT INTO {} ({columns}) VALUES ({placeholders}) RETURNING id",
        quote_ident(summary.table_name())
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;
    use nodetemp_core::error::CoreError;
    use nodetemp_core::summaries::{
        DimensionProfile, NodeThermalSummary, SummaryMessage,
    };
    use nodetemp_core::thermal::{NormalizedValue, ThermalDimension};
    use nodetemp_core::types::{SqlType, SqlValue};

    use super::*;

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("CPU_Utilization"), "\"CPU_Utilization\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn node_summary_table_ddl() {
        let sql = create_table_sql(&NodeThermalSummary::new("n1", "10.0.0.1"), None);
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"NodeThermalSummary\""));
        assert!(sql.contains("\"node_id\" TEXT"));
        assert!(sql.contains("\"host_address\" TEXT"));
        assert!(sql.contains("\"Heap_AllocRate\" SMALLINT"));
        assert!(!sql.contains("NOT NULL,"));
        assert!(!sql.contains(PARENT_ID_COL_NAME));
    }

    #[test]
    fn node_summary_insert() {
        let sql = insert_sql(&NodeThermalSummary::new("n1", "10.0.0.1"), false).unwrap();
        assert_eq!(
            sql,
            "INSERT INTO \"NodeThermalSummary\" (\"node_id\", \"host_address\", \
             \"CPU_Utilization\", \"Heap_AllocRate\", \"Shard_Size_In_Bytes\") \
             VALUES ($1, $2, $3, $4, $5) RETURNING id"
        );
    }

    #[test]
    fn profile_table_ddl() {
        let profile = Arc::new(DimensionProfile::new(
            ThermalDimension::CpuUtilization,
            NormalizedValue::new(2).unwrap(),
            10.0,
            Vec::new(),
        ));
        let sql = create_table_sql(profile.as_ref(), Some("NodeThermalSummary"));
        assert!(sql.contains("\"CPU_UtilizationSummary\""));
        assert!(sql.contains("\"total_usage\" DOUBLE PRECISION"));
        assert!(sql.contains("\"num_entries\" BIGINT"));
        assert!(sql.contains(
            "\"parent_id\" BIGINT NOT NULL REFERENCES \"NodeThermalSummary\"(id) ON DELETE CASCADE"
        ));
    }

    #[test]
    fn nested_insert_binds_parent_first() {
        let profile = DimensionProfile::new(
            ThermalDimension::HeapAllocRate,
            NormalizedValue::new(2).unwrap(),
            10.0,
            Vec::new(),
        );
        assert_eq!(
            insert_sql(&profile, true).unwrap(),
            "INSERT INTO \"Heap_AllocRateSummary\" (\"parent_id\", \"dimension\", \
             \"mean_value\", \"total_usage\", \"num_entries\") \
             VALUES ($1, $2, $3, $4, $5) RETURNING id"
        );
    }

    struct Lopsided;

    impl SummaryBase for Lopsided {
        fn table_name(&self) -> &'static str {
            "Lopsided"
        }
        fn sql_schema(&self) -> Vec<SqlColumn> {
            vec![SqlColumn::new("a", SqlType::Text)]
        }
        fn sql_value(&self) -> Vec<SqlValue> {
            Vec::new()
        }
        fn to_json(&self) -> serde_json::Value {
            serde_json::Value::Null
        }
        fn build_summary_message(&self) -> Result<SummaryMessage, CoreError> {
            Err(CoreError::NotTransportable { summary: "Lopsided" })
        }
    }

    #[test]
    fn misaligned_row_rejected() {
        assert_matches!(
            insert_sql(&Lopsided, false),
            Err(DbError::RowShapeMismatch { columns: 1, values: 0, .. })
        );
    }
}
