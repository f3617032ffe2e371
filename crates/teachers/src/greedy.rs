//! Greedy forward construction.
//!
//! Starting from an empty sample, each round tries adding every remaining
//! point, refits the human proxy on the sample sorted by x, and scores it
//! against the whole dataset. The best addition is kept. Once the sample
//! holds two points, the search stops at the first round whose best addition
//! does not improve on the previous round, discarding that addition. The
//! second point is always kept, so only a single-point dataset yields a
//! single-point sample.
//!
//! This costs at most `N` rounds of `N` fits each. It is a heuristic: the
//! result is the first local optimum in sample size, not a global optimum.

use exemplar_core::{Dataset, Evaluator, HumanProxy, Observer, Sample};
use tracing::info;

use crate::{
    Action, Error, Event, Solution, Status,
    best::{Best, Flow},
    score::score,
};

/// Points a sample always reaches before an addition may be rejected.
const MIN_SIZE: usize = 2;

/// Builds a sample one point at a time until adding a point stops helping.
///
/// # Errors
///
/// Returns an error if a fit fails.
pub fn select<H, E, Obs>(
    dataset: &Dataset,
    proxy: &H,
    evaluator: &E,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    H: HumanProxy,
    E: Evaluator,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let mut best = Best::empty();
    let mut pool: Vec<usize> = (0..dataset.len()).collect();
    let mut sample: Vec<usize> = Vec::new();
    let mut accepted = f64::INFINITY;

    loop {
        let mut round: Option<(usize, f64)> = None;

        for (slot, &candidate) in pool.iter().enumerate() {
            sample.push(candidate);
            let distance = score(dataset, proxy, evaluator, &sample)?;
            let flow = best.offer(&sample, distance, &mut observer);
            sample.pop();

            if round.is_none_or(|(_, d)| distance < d) {
                round = Some((slot, distance));
            }
            if flow == Flow::Stop {
                return best.finish(dataset, Status::StoppedByObserver);
            }
        }

        match round {
            Some((slot, distance)) if sample.len() < MIN_SIZE || distance < accepted => {
                accepted = distance;
                sample.push(pool.remove(slot));
            }
            _ => break,
        }
    }

    info!(
        dataset = dataset.name(),
        size = sample.len(),
        distance = accepted,
        "greedy construction finished"
    );
    Ok(Solution {
        status: Status::Complete,
        sample: Sample::from_indices(dataset, sample),
        distance: accepted,
        evaluations: best.evaluations(),
    })
}

/// Builds a sample greedily without observer support.
///
/// # Errors
///
/// Returns an error if a fit fails.
pub fn select_unobserved<H, E>(
    dataset: &Dataset,
    proxy: &H,
    evaluator: &E,
) -> Result<Solution, Error>
where
    H: HumanProxy,
    E: Evaluator,
{
    select(dataset, proxy, evaluator, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use exemplar_components::{Mse, Ols, PiecewiseLinear, ProxyKind};

    use crate::exhaustive;

    #[test]
    fn linear_series_needs_two_points() {
        let xs: Vec<f64> = (0..10).map(f64::from).collect();
        let ys = xs.iter().map(|x| 2.0 * x).collect();
        let dataset = Dataset::new("linear", xs, ys).unwrap();

        let solution = select_unobserved(&dataset, &Ols, &Mse).unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.sample.len(), 2);
        assert_relative_eq!(solution.distance, 0.0);
        // Best constant is y = 8 (first of the two equidistant middles), then
        // any second point is exact and the first one tried wins.
        assert_eq!(solution.sample.indices(), &[0, 4]);
        assert_eq!(solution.evaluations, 10 + 9 + 8);
    }

    #[test]
    fn grows_until_no_improvement() {
        let dataset = Dataset::new(
            "peak",
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            vec![0.0, 2.0, 4.0, 6.0, 3.0, 0.0],
        )
        .unwrap();

        let solution = select_unobserved(&dataset, &PiecewiseLinear::new(), &Mse).unwrap();

        assert_eq!(solution.sample.indices(), &[1, 3, 4]);
        assert_relative_eq!(solution.distance, 0.0);
        // Rounds of 6, 5, and 4, then a final non-improving round of 3.
        assert_eq!(solution.evaluations, 6 + 5 + 4 + 3);
    }

    #[test]
    fn second_point_is_kept_without_improvement() {
        // The best single point scores 0.6 and the best pair only ties it,
        // but the pair is kept and a third point then fits exactly.
        let dataset = Dataset::new(
            "tent",
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            vec![0.0, 1.0, 2.0, 1.0, 0.0],
        )
        .unwrap();

        let solution = select_unobserved(&dataset, &PiecewiseLinear::new(), &Mse).unwrap();

        assert_eq!(solution.sample.indices(), &[1, 2, 3]);
        assert_relative_eq!(solution.distance, 0.0);
        assert_eq!(solution.evaluations, 5 + 4 + 3 + 2);
    }

    #[test]
    fn discards_non_improving_addition() {
        // The pair of zeros ties the best single point at 0.4, and no third
        // point improves on it.
        let dataset = Dataset::new(
            "square-wave",
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            vec![0.0, 1.0, 0.0, 1.0, 0.0],
        )
        .unwrap();

        let solution = select_unobserved(&dataset, &PiecewiseLinear::new(), &Mse).unwrap();

        assert_eq!(solution.sample.indices(), &[0, 2]);
        assert_relative_eq!(solution.distance, 0.4, epsilon = 1e-12);
        assert_eq!(solution.evaluations, 5 + 4 + 3);
    }

    #[test]
    fn reported_distance_is_the_kept_sample() {
        let dataset = Dataset::new(
            "noisy",
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![3.0, -1.0, 4.0, 1.0, -5.0, 9.0, 2.0],
        )
        .unwrap();
        let proxy = ProxyKind::PiecewiseLinear7;

        let solution = select_unobserved(&dataset, &proxy, &Mse).unwrap();

        let fresh = score(&dataset, &proxy, &Mse, solution.sample.indices()).unwrap();
        assert_relative_eq!(solution.distance, fresh);
        assert!(solution.sample.len() >= 2);
    }

    #[test]
    fn sample_is_sorted_by_x() {
        let dataset = Dataset::new(
            "noisy",
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            vec![3.0, -1.0, 4.0, 1.0, -5.0, 9.0, 2.0],
        )
        .unwrap();

        let solution = select_unobserved(&dataset, &ProxyKind::PiecewiseLinear7, &Mse).unwrap();

        let xs = solution.sample.xs();
        assert!(xs.windows(2).all(|w| w[0] <= w[1]));
        assert!(solution.sample.len() >= 2);
    }

    #[test]
    fn two_point_greedy_never_beats_pair_search() {
        let dataset = Dataset::new(
            "curve",
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
            vec![0.0, 0.5, 2.5, 2.0, 4.5, 7.0],
        )
        .unwrap();

        let greedy = select_unobserved(&dataset, &Ols, &Mse).unwrap();
        let pair = exhaustive::pairs_unobserved(&dataset, &Mse).unwrap();

        if greedy.sample.len() == 2 {
            assert!(pair.distance <= greedy.distance);
        }
    }

    #[test]
    fn single_point_dataset() {
        let dataset = Dataset::new("one", vec![1.0], vec![2.0]).unwrap();
        let solution = select_unobserved(&dataset, &Ols, &Mse).unwrap();
        assert_eq!(solution.sample.indices(), &[0]);
    }

    #[test]
    fn stops_when_observer_asks() {
        let xs: Vec<f64> = (0..6).map(f64::from).collect();
        let ys = xs.iter().map(|x| x * x).collect();
        let dataset = Dataset::new("square", xs, ys).unwrap();

        let observer = |event: &Event<'_>| -> Option<Action> {
            matches!(event, Event::Evaluated { indices, .. } if indices.len() == 2)
                .then_some(Action::StopEarly)
        };
        let solution = select(&dataset, &Ols, &Mse, observer).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.evaluations, 7);
    }
}
