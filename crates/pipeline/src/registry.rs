//! Closed name registries for the three pipeline components.
//!
//! Each registry accepts a short name and the identifier used by the web
//! front end (`H_OLS`, `T_PL7`, `E_MSE`, ...). Anything else is an
//! [`UnknownName`].

use std::{fmt, str::FromStr};

use exemplar_components::{EvaluatorKind, ProxyKind};
use thiserror::Error;

/// A component name that is not in its registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} `{name}`")]
pub struct UnknownName {
    /// The registry that rejected the name.
    pub kind: &'static str,

    /// The rejected name.
    pub name: String,
}

/// The human proxy a pipeline refits on the chosen sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyName {
    Ols,
    Quadratic,
    PiecewiseLinear7,
}

impl ProxyName {
    /// Returns every supported proxy.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Ols, Self::Quadratic, Self::PiecewiseLinear7]
    }

    /// Returns the short name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ols => "ols",
            Self::Quadratic => "quad",
            Self::PiecewiseLinear7 => "pl7",
        }
    }

    /// Returns the proxy this name selects.
    #[must_use]
    pub fn proxy(self) -> ProxyKind {
        match self {
            Self::Ols => ProxyKind::Ols,
            Self::Quadratic => ProxyKind::Quadratic,
            Self::PiecewiseLinear7 => ProxyKind::PiecewiseLinear7,
        }
    }
}

impl FromStr for ProxyName {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ols" | "H_OLS" => Ok(Self::Ols),
            "quad" | "H_quad" => Ok(Self::Quadratic),
            "pl7" | "H_PL7" => Ok(Self::PiecewiseLinear7),
            _ => Err(UnknownName {
                kind: "proxy",
                name: s.to_owned(),
            }),
        }
    }
}

/// The search strategy a pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeacherName {
    /// Exhaustive pair search with a line.
    Pair,
    /// Exhaustive triple search with a parabola.
    Triple,
    /// Bounded dynamic-programming path search.
    Path,
    Greedy,
    HillClimb,
}

impl TeacherName {
    /// Returns every supported teacher.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::Pair,
            Self::Triple,
            Self::Path,
            Self::Greedy,
            Self::HillClimb,
        ]
    }

    /// Returns the short name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pair => "pair",
            Self::Triple => "triple",
            Self::Path => "dp",
            Self::Greedy => "greedy",
            Self::HillClimb => "hill_climb",
        }
    }
}

impl FromStr for TeacherName {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pair" | "T_OLS2" => Ok(Self::Pair),
            "triple" | "T_quad3" => Ok(Self::Triple),
            "dp" | "T_PL7" => Ok(Self::Path),
            "greedy" | "T_GreedyConstruction" => Ok(Self::Greedy),
            "hill_climb" | "T_HillClimbingRestart" => Ok(Self::HillClimb),
            _ => Err(UnknownName {
                kind: "teacher",
                name: s.to_owned(),
            }),
        }
    }
}

/// The distance a pipeline minimizes and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvaluatorName {
    Mse,
    Extrema,
    MseExtrema,
}

impl EvaluatorName {
    /// Returns every supported evaluator.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Mse, Self::Extrema, Self::MseExtrema]
    }

    /// Returns the short name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mse => "mse",
            Self::Extrema => "extrema",
            Self::MseExtrema => "mse_extrema",
        }
    }

    /// Returns the evaluator this name selects.
    #[must_use]
    pub fn evaluator(self) -> EvaluatorKind {
        match self {
            Self::Mse => EvaluatorKind::Mse,
            Self::Extrema => EvaluatorKind::Extrema,
            Self::MseExtrema => EvaluatorKind::MseExtrema,
        }
    }
}

impl FromStr for EvaluatorName {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mse" | "E_MSE" => Ok(Self::Mse),
            "extrema" | "E_extrema" => Ok(Self::Extrema),
            "mse_extrema" | "E_MSE_extrema" => Ok(Self::MseExtrema),
            _ => Err(UnknownName {
                kind: "evaluator",
                name: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ProxyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TeacherName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EvaluatorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_round_trip() {
        for name in ProxyName::all() {
            assert_eq!(name.as_str().parse::<ProxyName>(), Ok(*name));
        }
        for name in TeacherName::all() {
            assert_eq!(name.to_string().parse::<TeacherName>(), Ok(*name));
        }
        for name in EvaluatorName::all() {
            assert_eq!(name.as_str().parse::<EvaluatorName>(), Ok(*name));
        }
    }

    #[test]
    fn front_end_identifiers() {
        assert_eq!("H_PL7".parse(), Ok(ProxyName::PiecewiseLinear7));
        assert_eq!("T_OLS2".parse(), Ok(TeacherName::Pair));
        assert_eq!("T_quad3".parse(), Ok(TeacherName::Triple));
        assert_eq!("T_PL7".parse(), Ok(TeacherName::Path));
        assert_eq!("T_HillClimbingRestart".parse(), Ok(TeacherName::HillClimb));
        assert_eq!("E_MSE_extrema".parse(), Ok(EvaluatorName::MseExtrema));
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "H_cubic".parse::<ProxyName>().unwrap_err();
        assert_eq!(err.kind, "proxy");
        assert_eq!(err.name, "H_cubic");
        assert_eq!(err.to_string(), "unknown proxy `H_cubic`");

        assert!("MSE".parse::<EvaluatorName>().is_err());
        assert!("".parse::<TeacherName>().is_err());
    }

    #[test]
    fn names_select_matching_components() {
        assert_eq!(ProxyName::Quadratic.proxy(), ProxyKind::Quadratic);
        assert_eq!(EvaluatorName::Extrema.evaluator(), EvaluatorKind::Extrema);
    }
}
