use thiserror::Error;

/// Failure reported by a map-surface backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("map surface is not initialized")]
    NotInitialized,

    #[error("map surface rejected {operation}: {reason}")]
    Rejected {
        operation: &'static str,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map controller has been torn down")]
    TornDown,

    #[error("map surface initialization failed: {0}")]
    Surface(#[from] SurfaceError),
}
