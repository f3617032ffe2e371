use serde::Deserialize;

/// A declarative description of a pipeline.
///
/// Component names go through the registries in [`crate::registry`]. The
/// optional knobs override a teacher's defaults and are ignored (with a
/// warning) by teachers that have no use for them.
///
/// ```
/// use exemplar_pipeline::PipelineSpec;
///
/// let spec: PipelineSpec = serde_json::from_str(
///     r#"{ "proxy": "H_PL7", "teacher": "T_PL7", "evaluator": "E_MSE", "depth": 5 }"#,
/// )
/// .unwrap();
/// assert_eq!(spec.depth, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineSpec {
    pub proxy: String,
    pub teacher: String,
    pub evaluator: String,

    /// Chain length for the path search.
    #[serde(default)]
    pub depth: Option<usize>,

    /// Number of hill-climb restarts.
    #[serde(default)]
    pub restarts: Option<usize>,

    /// Size of each hill-climb's initial sample.
    #[serde(default)]
    pub sample_size: Option<usize>,

    /// Non-improving moves before a hill-climb restart ends.
    #[serde(default)]
    pub patience: Option<usize>,

    /// Seed for the hill-climb. Without one, each run draws from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl PipelineSpec {
    /// Creates a spec from component names with every knob at its default.
    #[must_use]
    pub fn new(
        proxy: impl Into<String>,
        teacher: impl Into<String>,
        evaluator: impl Into<String>,
    ) -> Self {
        Self {
            proxy: proxy.into(),
            teacher: teacher.into(),
            evaluator: evaluator.into(),
            depth: None,
            restarts: None,
            sample_size: None,
            patience: None,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knobs_default_to_none() {
        let spec: PipelineSpec =
            serde_json::from_str(r#"{ "proxy": "ols", "teacher": "pair", "evaluator": "mse" }"#)
                .unwrap();
        assert_eq!(spec, PipelineSpec::new("ols", "pair", "mse"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = serde_json::from_str::<PipelineSpec>(
            r#"{ "proxy": "ols", "teacher": "pair", "evaluator": "mse", "temperature": 1.0 }"#,
        );
        assert!(result.is_err());
    }
}
