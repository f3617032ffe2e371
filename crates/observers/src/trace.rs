use exemplar_core::Observer;
use exemplar_teachers::Event;
use tracing::{debug, trace};

/// Logs a teacher's progress through `tracing`.
///
/// Improvements are logged at `debug` and every evaluation at `trace`. The
/// observer never asks a teacher to stop.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    label: String,
    evaluations: usize,
    improvements: usize,
}

impl Trace {
    /// Creates a trace whose log lines carry `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Returns the number of evaluations seen.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Returns the number of improvements seen.
    #[must_use]
    pub fn improvements(&self) -> usize {
        self.improvements
    }
}

impl Trace {
    fn record(&mut self, event: &Event<'_>) {
        match event {
            Event::Evaluated {
                indices,
                distance,
                best,
            } => {
                self.evaluations += 1;
                trace!(label = %self.label, ?indices, distance, best, "evaluated");
            }
            Event::Improved { indices, distance } => {
                self.improvements += 1;
                debug!(
                    label = %self.label,
                    evaluation = self.evaluations,
                    ?indices,
                    distance,
                    "improved"
                );
            }
        }
    }
}

impl<A> Observer<Event<'_>, A> for Trace {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        self.record(event);
        None
    }
}

/// Lets a caller keep the trace and read its counts after the search.
impl<A> Observer<Event<'_>, A> for &mut Trace {
    fn observe(&mut self, event: &Event<'_>) -> Option<A> {
        self.record(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use exemplar_components::Mse;
    use exemplar_core::Dataset;
    use exemplar_teachers::exhaustive;

    #[test]
    fn counts_events() {
        let xs: Vec<f64> = (0..6).map(f64::from).collect();
        let ys = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
        let dataset = Dataset::new("trace", xs, ys).unwrap();

        let mut trace = Trace::new("pairs");
        let solution = exhaustive::pairs(&dataset, &Mse, &mut trace).unwrap();

        assert_eq!(trace.evaluations(), 15);
        assert_eq!(trace.evaluations(), solution.evaluations);
        assert!(trace.improvements() >= 1);
        assert!(trace.improvements() <= trace.evaluations());
    }
}
