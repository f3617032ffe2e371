use exemplar_core::Sample;
use serde::Serialize;

/// The outcome of a pipeline run, shaped for a front end.
///
/// Serializes as
/// `{ "sample": { "x": [..], "y": [..] }, "distance", "score", "x", "prediction" }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// The chosen sample, sorted by x.
    pub sample: Sample,

    /// The distance the teacher computed while searching.
    pub distance: f64,

    /// The evaluator's score of the proxy refit on the sample, over the whole
    /// series. Comparable across teachers.
    pub score: f64,

    /// The dataset's x values.
    pub x: Vec<f64>,

    /// The refit proxy's prediction at each x.
    pub prediction: Vec<f64>,
}

impl Report {
    /// Serializes the report as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use exemplar_core::Dataset;
    use serde_json::{Value, json};

    #[test]
    fn json_shape() {
        let dataset = Dataset::new("r", vec![0.0, 1.0, 2.0], vec![1.0, 3.0, 5.0]).unwrap();
        let report = Report {
            sample: Sample::from_indices(&dataset, [2, 0]),
            distance: 0.25,
            score: 0.5,
            x: dataset.xs().to_vec(),
            prediction: vec![1.0, 3.0, 5.0],
        };

        let value: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "sample": { "x": [0.0, 2.0], "y": [1.0, 5.0] },
                "distance": 0.25,
                "score": 0.5,
                "x": [0.0, 1.0, 2.0],
                "prediction": [1.0, 3.0, 5.0],
            })
        );
    }
}
