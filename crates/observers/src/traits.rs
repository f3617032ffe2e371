//! Capability traits for cross-teacher observers.
//!
//! These traits abstract over event and action types, so an observer written
//! against them works with any teacher that speaks them.
//!
//! # Example
//!
//! ```rust
//! use exemplar_core::Observer;
//! use exemplar_observers::traits::{CanStopEarly, HasDistance};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasDistance, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.distance() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use exemplar_teachers::{Action, Event};

/// An event that carries a candidate's distance.
pub trait HasDistance {
    /// Returns the distance for this event.
    fn distance(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the teacher early.
    fn stop_early() -> Self;
}

impl HasDistance for Event<'_> {
    fn distance(&self) -> f64 {
        Event::distance(self)
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_distance_is_exposed() {
        let indices = [0, 3];
        let event = Event::Improved {
            indices: &indices,
            distance: 1.5,
        };
        assert_eq!(HasDistance::distance(&event), 1.5);
    }

    #[test]
    fn action_stops_early() {
        assert_eq!(Action::stop_early(), Action::StopEarly);
    }
}
