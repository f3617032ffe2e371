use exemplar_core::{Dataset, Observer, Sample};

use crate::{Action, Error, Event, Solution, Status};

/// Whether the search should keep going after an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Stop,
}

/// Tracks the best candidate encountered so far and reports every
/// evaluation to the observer.
///
/// Comparisons are strict, so on ties the earliest candidate is kept. The
/// first candidate is kept even when its distance is infinite; a NaN
/// distance is never kept.
pub(crate) struct Best {
    indices: Vec<usize>,
    distance: f64,
    evaluations: usize,
}

impl Best {
    /// Creates an empty best tracker.
    pub(crate) fn empty() -> Self {
        Self {
            indices: Vec::new(),
            distance: f64::INFINITY,
            evaluations: 0,
        }
    }

    pub(crate) fn distance(&self) -> f64 {
        self.distance
    }

    pub(crate) fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Records an evaluated candidate, emits its events, and returns whether
    /// the observer asked to stop.
    pub(crate) fn offer<Obs>(
        &mut self,
        indices: &[usize],
        distance: f64,
        observer: &mut Obs,
    ) -> Flow
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        self.evaluations += 1;

        let improved =
            distance < self.distance || (self.indices.is_empty() && distance == f64::INFINITY);
        if improved {
            self.indices.clear();
            self.indices.extend_from_slice(indices);
            self.distance = distance;
        }

        let event = Event::Evaluated {
            indices,
            distance,
            best: self.distance,
        };
        let mut stop = observer.observe(&event) == Some(Action::StopEarly);

        if improved {
            let event = Event::Improved { indices, distance };
            stop |= observer.observe(&event) == Some(Action::StopEarly);
        }

        if stop { Flow::Stop } else { Flow::Continue }
    }

    /// Finalizes the search using the best candidate.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoCandidate` if nothing was offered or every distance
    /// was NaN.
    pub(crate) fn finish(self, dataset: &Dataset, status: Status) -> Result<Solution, Error> {
        if self.indices.is_empty() {
            return Err(Error::NoCandidate);
        }
        Ok(Solution {
            status,
            sample: Sample::from_indices(dataset, self.indices),
            distance: self.distance,
            evaluations: self.evaluations,
        })
    }
}
