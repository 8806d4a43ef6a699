use thiserror::Error;

/// Top-level error type for stroke geometry operations.
#[derive(Debug, Error)]
pub enum StrokeGeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised by operations on caller-supplied input.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Convenience type alias for results using [`StrokeGeomError`].
pub type Result<T> = std::result::Result<T, StrokeGeomError>;
