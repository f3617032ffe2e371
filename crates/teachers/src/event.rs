/// Events emitted by teachers.
///
/// Indices refer to positions in the dataset being searched. They are given
/// in the order the teacher assembled them, which is not necessarily x order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// A candidate sample was fitted and scored.
    Evaluated {
        /// The candidate's dataset indices.
        indices: &'a [usize],

        /// The candidate's distance.
        distance: f64,

        /// The best distance found so far, including this candidate.
        best: f64,
    },

    /// The candidate just evaluated is the new best.
    Improved {
        /// The new best candidate's dataset indices.
        indices: &'a [usize],

        /// The new best distance.
        distance: f64,
    },
}

impl Event<'_> {
    /// Returns the indices carried by the event.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        match self {
            Self::Evaluated { indices, .. } | Self::Improved { indices, .. } => indices,
        }
    }

    /// Returns the distance carried by the event.
    #[must_use]
    pub fn distance(&self) -> f64 {
        match self {
            Self::Evaluated { distance, .. } | Self::Improved { distance, .. } => *distance,
        }
    }
}
