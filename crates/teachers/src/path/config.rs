use thiserror::Error;

/// Default number of points in a chain.
pub const DEFAULT_DEPTH: usize = 7;

/// Configuration for the path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    depth: usize,
}

/// Errors that can occur when validating a path search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("depth must be at least 2, got {0}")]
    Depth(usize),
}

impl Default for Config {
    fn default() -> Self {
        // Known-good value, unwrap is safe
        Self::new(DEFAULT_DEPTH).unwrap()
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// # Errors
    ///
    /// Returns an error if `depth` is less than 2.
    pub fn new(depth: usize) -> Result<Self, ConfigError> {
        if depth < 2 {
            return Err(ConfigError::Depth(depth));
        }
        Ok(Self { depth })
    }

    /// Returns the number of points in a chain.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_depth_is_seven() {
        assert_eq!(Config::default().depth(), 7);
    }

    #[test]
    fn rejects_short_chains() {
        assert_eq!(Config::new(1), Err(ConfigError::Depth(1)));
        assert!(Config::new(2).is_ok());
    }
}
