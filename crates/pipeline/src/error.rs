use exemplar_core::FitError;
use exemplar_teachers::{hill_climb, path};
use thiserror::Error;

use crate::{LoadError, registry::UnknownName};

/// Errors that can occur when running a pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The dataset could not be loaded. Raised before any search runs.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] LoadError),

    /// The pipeline was described with an unknown name or a bad setting.
    /// Raised before any search runs.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigurationError),

    #[error("search failed: {0}")]
    Search(#[from] exemplar_teachers::Error),

    /// Refitting the proxy on the chosen sample failed.
    #[error("fit failed: {0}")]
    Fit(#[from] FitError),
}

/// Errors that can occur when building a pipeline from a spec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error(transparent)]
    UnknownName(#[from] UnknownName),

    #[error("path search: {0}")]
    Path(#[from] path::ConfigError),

    #[error("hill climb: {0}")]
    HillClimb(#[from] hill_climb::ConfigError),
}
