use crate::{api::ApiError, document::DocumentError};

/// Why a reconcile stopped. Remote failures carry the remote error text unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error("Error getting ETag: {0}")]
    FetchETag(#[source] ApiError),
    #[error("Error getting config: {0}")]
    FetchConfig(#[source] ApiError),
    #[error("Error updating distribution: {0}")]
    Update(#[source] ApiError),
    #[error("Malformed distribution config: {0}")]
    Malformed(#[from] DocumentError),
    #[error("Failed to stage distribution config: {0}")]
    Staging(#[from] std::io::Error),
}
