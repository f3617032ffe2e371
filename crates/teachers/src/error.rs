use exemplar_core::FitError;
use thiserror::Error;

use crate::path::StoreError;

/// Errors that can occur during a search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("fit failed: {0}")]
    Fit(#[from] FitError),

    #[error("memo store error: {0}")]
    Store(#[from] StoreError),

    #[error("no candidate with a comparable distance was evaluated")]
    NoCandidate,
}
