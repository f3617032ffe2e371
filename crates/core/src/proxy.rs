use thiserror::Error;

/// Errors that can occur when fitting a human proxy.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    #[error("cannot fit a model to zero points")]
    Empty,

    #[error("x has {xs} values but y has {ys}")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("least-squares system could not be solved")]
    Degenerate,
}

impl FitError {
    /// Checks the shape shared by every fit: non-empty, equal-length slices.
    ///
    /// # Errors
    ///
    /// Returns the first shape violation found.
    pub fn check(xs: &[f64], ys: &[f64]) -> Result<(), Self> {
        if xs.len() != ys.len() {
            return Err(Self::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.is_empty() {
            return Err(Self::Empty);
        }
        Ok(())
    }
}

/// A fitted function `ℝ → ℝ`.
///
/// Prediction never refits, so a fitted value can be queried any number of
/// times.
pub trait Predict {
    /// Predicts y at a single x.
    fn predict_one(&self, x: f64) -> f64;

    /// Predicts one y per input x.
    fn predict(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict_one(x)).collect()
    }
}

/// A simple regression model standing in for how a human would extrapolate
/// from a few points.
///
/// A proxy is a fit factory: fitting never mutates it, and every call
/// returns a fresh [`Predict`] value. This keeps refits from racing with
/// predictions on a previously fitted state.
pub trait HumanProxy {
    type Fitted: Predict;

    /// Fits the proxy to the given points.
    ///
    /// # Errors
    ///
    /// Returns [`FitError`] if the points are empty or the slices differ in
    /// length.
    fn fit(&self, xs: &[f64], ys: &[f64]) -> Result<Self::Fitted, FitError>;
}
