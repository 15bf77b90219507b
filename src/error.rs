use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataAccessError {
    #[error("query failed: {0}")]
    Query(String),

    #[error("missing column: {column}")]
    MissingColumn { column: String },

    #[error("column {column} is null")]
    NullColumn { column: String },

    #[error("column {column} is not {expected}")]
    ColumnType {
        column: String,
        expected: &'static str,
    },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type ContactResult<T> = Result<T, DataAccessError>;
