use exemplar_core::Sample;

/// Indicates how the teacher terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The search ran to its own convergence criterion.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a teacher's search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the teacher terminated.
    pub status: Status,

    /// The selected sample, sorted by x.
    pub sample: Sample,

    /// The distance the teacher computed for the sample.
    ///
    /// This is the teacher's own score. It can differ from a fresh evaluation
    /// of the sample when the teacher scores over partial windows.
    pub distance: f64,

    /// Number of model fits the teacher scored against data.
    pub evaluations: usize,
}
