use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling a run. Nothing fails once the event
/// loop has started: broken invariants panic instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("at least one source is required")]
    NoSources,

    #[error("at least one device is required")]
    NoDevices,

    #[error("buffer capacity must be at least 1")]
    ZeroCapacity,

    #[error("invalid inter-arrival interval [{min}, {max}]")]
    InvalidInterval { min: f64, max: f64 },

    #[error("invalid mean service time {0}")]
    InvalidServiceMean(f64),

    #[error("invalid time limit {0}")]
    InvalidTimeLimit(f64),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
