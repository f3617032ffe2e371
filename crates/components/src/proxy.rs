mod ols;
mod piecewise;
mod quadratic;

pub use ols::{Line, Ols};
pub use piecewise::{DEFAULT_WINDOW, PiecewiseLinear, Polyline};
pub use quadratic::{Parabola, Quadratic};

use exemplar_core::{FitError, HumanProxy, Predict};

/// The supported human proxies, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyKind {
    Ols,
    Quadratic,
    /// Piecewise-linear over the last [`DEFAULT_WINDOW`] points.
    PiecewiseLinear7,
}

/// A model fitted by one of the [`ProxyKind`] variants.
#[derive(Debug, Clone, PartialEq)]
pub enum FittedProxy {
    Line(Line),
    Parabola(Parabola),
    Polyline(Polyline),
}

impl HumanProxy for ProxyKind {
    type Fitted = FittedProxy;

    fn fit(&self, xs: &[f64], ys: &[f64]) -> Result<FittedProxy, FitError> {
        match self {
            Self::Ols => Ols.fit(xs, ys).map(FittedProxy::Line),
            Self::Quadratic => Quadratic.fit(xs, ys).map(FittedProxy::Parabola),
            Self::PiecewiseLinear7 => PiecewiseLinear::windowed()
                .fit(xs, ys)
                .map(FittedProxy::Polyline),
        }
    }
}

impl Predict for FittedProxy {
    fn predict_one(&self, x: f64) -> f64 {
        match self {
            Self::Line(m) => m.predict_one(x),
            Self::Parabola(m) => m.predict_one(x),
            Self::Polyline(m) => m.predict_one(x),
        }
    }
}
