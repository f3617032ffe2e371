//! Human proxies and evaluators for the Exemplar framework.
//!
//! # Human proxies
//!
//! - [`Ols`] — straight line by ordinary least squares
//! - [`Quadratic`] — parabola by least squares on a degree-2 expansion
//! - [`PiecewiseLinear`] — "connect the dots", optionally over a sliding window
//!
//! # Evaluators
//!
//! - [`Mse`] — mean squared prediction error over the whole series
//! - [`Extrema`] — squared error of the series maximum plus that of the minimum
//! - [`MseExtrema`] — `Mse + 10 × Extrema`
//!
//! [`ProxyKind`] and [`EvaluatorKind`] close over the variants above so that
//! callers can choose one at runtime without trait objects.

mod evaluator;
mod proxy;

pub use evaluator::{EXTREMA_WEIGHT, EvaluatorKind, Extrema, Mse, MseExtrema};
pub use proxy::{
    FittedProxy, Line, Ols, Parabola, PiecewiseLinear, Polyline, ProxyKind, Quadratic,
    DEFAULT_WINDOW,
};
