//! Row-shape types shared by every summary's tabular projection.
//!
//! A summary describes its row as an ordered list of [`SqlColumn`]s and
//! produces a parallel list of [`SqlValue`]s. The persistence layer only
//! ever sees these two lists.

use serde::Serialize;

/// Primitive column type of a summary row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlType {
    Text,
    SmallInt,
    Integer,
    BigInt,
    Double,
}

impl SqlType {
    /// Postgres type name used when generating DDL.
    pub fn as_pg_type(self) -> &'static str {
        match self {
            SqlType::Text => "TEXT",
            SqlType::SmallInt => "SMALLINT",
            SqlType::Integer => "INTEGER",
            SqlType::BigInt => "BIGINT",
            SqlType::Double => "DOUBLE PRECISION",
        }
    }
}

/// A named, typed column in a summary row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlColumn {
    pub name: String,
    pub sql_type: SqlType,
}

impl SqlColumn {
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
        }
    }
}

/// A single cell of a summary row.
///
/// `Null` marks missing data. It is never replaced by a zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    Text(String),
    SmallInt(i16),
    Integer(i32),
    BigInt(i64),
    Double(f64),
    Null,
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl From<Option<i16>> for SqlValue {
    fn from(value: Option<i16>) -> Self {
        value.map_or(SqlValue::Null, SqlValue::SmallInt)
    }
}
