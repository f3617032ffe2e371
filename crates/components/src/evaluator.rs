use exemplar_core::Evaluator;

/// Weight of the extrema term in [`MseExtrema`].
pub const EXTREMA_WEIGHT: f64 = 10.0;

/// Mean squared prediction error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mse;

/// Squared error of the maximum plus squared error of the minimum.
///
/// Penalizes a model that fails to reproduce the range of the series,
/// regardless of its pointwise fit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extrema;

/// `Mse + 10 × Extrema`, favoring range fidelity over pointwise accuracy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MseExtrema;

impl Evaluator for Mse {
    fn name(&self) -> &'static str {
        "mse"
    }

    fn distance(&self, truth: &[f64], predicted: &[f64]) -> f64 {
        if truth.is_empty() {
            return 0.0;
        }
        let sum: f64 = truth
            .iter()
            .zip(predicted)
            .map(|(t, p)| (t - p).powi(2))
            .sum();
        #[allow(clippy::cast_precision_loss)]
        let n = truth.len() as f64;
        sum / n
    }
}

impl Evaluator for Extrema {
    fn name(&self) -> &'static str {
        "extrema"
    }

    fn distance(&self, truth: &[f64], predicted: &[f64]) -> f64 {
        if truth.is_empty() {
            return 0.0;
        }
        let (t_min, t_max) = bounds(truth);
        let (p_min, p_max) = bounds(predicted);
        (t_max - p_max).powi(2) + (t_min - p_min).powi(2)
    }
}

impl Evaluator for MseExtrema {
    fn name(&self) -> &'static str {
        "mse_extrema"
    }

    fn distance(&self, truth: &[f64], predicted: &[f64]) -> f64 {
        Mse.distance(truth, predicted) + EXTREMA_WEIGHT * Extrema.distance(truth, predicted)
    }
}

fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// The supported evaluators, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluatorKind {
    Mse,
    Extrema,
    MseExtrema,
}

impl Evaluator for EvaluatorKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Mse => Mse.name(),
            Self::Extrema => Extrema.name(),
            Self::MseExtrema => MseExtrema.name(),
        }
    }

    fn distance(&self, truth: &[f64], predicted: &[f64]) -> f64 {
        match self {
            Self::Mse => Mse.distance(truth, predicted),
            Self::Extrema => Extrema.distance(truth, predicted),
            Self::MseExtrema => MseExtrema.distance(truth, predicted),
        }
    }
}
