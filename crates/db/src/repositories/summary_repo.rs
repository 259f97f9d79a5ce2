//! Repository writing any [`SummaryBase`] row into its own table.

use nodetemp_core::summaries::SummaryBase;
use nodetemp_core::types::{SqlColumn, SqlType, SqlValue};
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{PgExecutor, PgPool, Postgres, Row};

use crate::error::DbError;
use crate::DbId;
use crate::statements::{create_table_sql, insert_sql};

type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Provides table creation and row inserts for summaries.
pub struct SummaryRepo;

impl SummaryRepo {
    /// Create the summary's table if it does not exist yet.
    ///
    /// Nested summaries pass their parent's table name so the table gets a
    /// `parent_id` column.
    pub async fn ensure_table(
        pool: &PgPool,
        summary: &dyn SummaryBase,
        parent_table: Option<&str>,
    ) -> Result<(), DbError> {
        let sql = create_table_sql(summary, parent_table);
        sqlx::query(&sql).execute(pool).await?;
        tracing::debug!(table = summary.table_name(), "Ensured summary table");
        Ok(())
    }

    /// Insert the summary's row and return its generated id.
    ///
    /// `parent_id` must be given exactly when the table was created with a
    /// parent.
    pub async fn insert<'e, E>(
        executor: E,
        summary: &dyn SummaryBase,
        parent_id: Option<DbId>,
    ) -> Result<DbId, DbError>
    where
        E: PgExecutor<'e>,
    {
        let sql = insert_sql(summary, parent_id.is_some())?;
        let schema = summary.sql_schema();
        let values = summary.sql_value();

        let mut q = sqlx::query(&sql);
        if let Some(parent_id) = parent_id {
            q = q.bind(parent_id);
        }
        for (column, value) in schema.iter().zip(values) {
            q = bind_value(q, column, value)?;
        }
        let row = q.fetch_one(executor).await?;
        let id: DbId = row.try_get("id")?;
        tracing::debug!(table = summary.table_name(), id, "Inserted summary row");
        Ok(id)
    }

    /// Insert the summary's row and the rows of all its nested summaries
    /// in a single transaction, creating missing tables first.
    ///
    /// Nested rows reference the parent row through `parent_id`. Returns the
    /// parent row's id.
    pub async fn insert_with_nested(
        pool: &PgPool,
        summary: &dyn SummaryBase,
    ) -> Result<DbId, DbError> {
        let nested = summary.nested_summaries();
        let parent_table = summary.table_name();

        Self::ensure_table(pool, summary, None).await?;
        for n in &nested {
            Self::ensure_table(pool, n.as_ref(), Some(parent_table)).await?;
        }

        let mut tx = pool.begin().await?;
        let parent_id = Self::insert(&mut *tx, summary, None).await?;
        for n in &nested {
            Self::insert(&mut *tx, n.as_ref(), Some(parent_id)).await?;
        }
        tx.commit().await?;

        tracing::info!(
            table = parent_table,
            id = parent_id,
            nested = nested.len(),
            "Persisted summary"
        );
        Ok(parent_id)
    }
}

/// Bind one cell, using the column type to give nulls a concrete type.
fn bind_value<'q>(
    q: PgQuery<'q>,
    column: &SqlColumn,
    value: SqlValue,
) -> Result<PgQuery<'q>, DbError> {
    if value.is_null() {
        return Ok(match column.sql_type {
            SqlType::Text => q.bind(None::<String>),
            SqlType::SmallInt => q.bind(None::<i16>),
            SqlType::Integer => q.bind(None::<i32>),
            SqlType::BigInt => q.bind(None::<i64>),
            SqlType::Double => q.bind(None::<f64>),
        });
    }
    let q = match (column.sql_type, value) {
        (SqlType::Text, SqlValue::Text(s)) => q.bind(s),
        (SqlType::SmallInt, SqlValue::SmallInt(n)) => q.bind(n),
        (SqlType::Integer, SqlValue::Integer(n)) => q.bind(n),
        (SqlType::BigInt, SqlValue::BigInt(n)) => q.bind(n),
        (SqlType::Double, SqlValue::Double(f)) => q.bind(f),
        (expected, other) => {
            return Err(DbError::ValueTypeMismatch {
                column: column.name.clone(),
                expected: expected.as_pg_type(),
                value: format!("{other:?}"),
            })
        }
    };
    Ok(q)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn typed_nulls_bind_for_every_column_type() {
        for sql_type in [
            SqlType::Text,
            SqlType::SmallInt,
            SqlType::Integer,
            SqlType::BigInt,
            SqlType::Double,
        ] {
            let column = SqlColumn::new("c", sql_type);
            assert!(bind_value(sqlx::query("SELECT $1"), &column, SqlValue::Null).is_ok());
        }
    }

    #[test]
    fn matching_value_binds() {
        let column = SqlColumn::new("CPU_Utilization", SqlType::SmallInt);
        assert!(bind_value(sqlx::query("SELECT $1"), &column, SqlValue::SmallInt(4)).is_ok());
    }

    #[test]
    fn mismatched_value_rejected() {
        let column = SqlColumn::new("node_id", SqlType::Text);
        let err = bind_value(sqlx::query("SELECT $1"), &column, SqlValue::SmallInt(1))
            .err()
            .unwrap();
        assert_matches!(err, DbError::ValueTypeMismatch { expected: "TEXT", .. });
    }
}
