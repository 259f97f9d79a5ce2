use nodetemp_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// A summary produced a row that does not line up with its schema.
    #[error("Row for {table} has {values} values but {columns} columns")]
    RowShapeMismatch {
        table: &'static str,
        columns: usize,
        values: usize,
    },

    #[error("Value {value} does not fit column {column} of type {expected}")]
    ValueTypeMismatch {
        column: String,
        expected: &'static str,
        value: String,
    },
}
