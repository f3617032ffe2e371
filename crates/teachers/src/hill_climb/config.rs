use thiserror::Error;

/// Configuration for the randomized hill-climb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    restarts: usize,
    sample_size: usize,
    patience: usize,
}

/// Errors that can occur when validating a hill-climb config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("restarts must be at least 1")]
    Restarts,

    #[error("sample_size must be at least 1")]
    SampleSize,

    #[error("patience must be at least 1")]
    Patience,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 7, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if any count is zero.
    pub fn new(restarts: usize, sample_size: usize, patience: usize) -> Result<Self, ConfigError> {
        if restarts == 0 {
            return Err(ConfigError::Restarts);
        }
        if sample_size == 0 {
            return Err(ConfigError::SampleSize);
        }
        if patience == 0 {
            return Err(ConfigError::Patience);
        }

        Ok(Self {
            restarts,
            sample_size,
            patience,
        })
    }

    /// Returns the number of independent climbs.
    #[must_use]
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// Returns the size of each climb's random initial sample.
    #[must_use]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Returns how many consecutive non-improving moves end a climb.
    #[must_use]
    pub fn patience(&self) -> usize {
        self.patience
    }
}
