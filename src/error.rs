use thiserror::Error;

/// Top-level error type for the platekit mesh kernel.
#[derive(Debug, Error)]
pub enum PlateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to shape and build configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown shape kind: {0:?}")]
    UnknownShape(String),

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be at least {min}, got {value}")]
    TooFewSegments {
        name: &'static str,
        min: usize,
        value: usize,
    },

    #[error("{name} = {value} is out of range ({min}, {max})")]
    RatioOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors related to generated geometry consistency.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("material groups must cover the index buffer exactly: {0}")]
    GroupCoverage(String),
}

/// Convenience type alias for results using [`PlateError`].
pub type Result<T> = std::result::Result<T, PlateError>;
