//! Exhaustive search over fixed-size samples.
//!
//! - [`pairs`] fits a line through every pair of points: `O(N²)` fits.
//! - [`triples`] fits a parabola through every triple: `O(N³)` fits, so it
//!   is only practical for small datasets.
//!
//! Each candidate is scored against the *whole* dataset, not just the points
//! it was fit on. Both searches are white-box: they always use their own
//! model ([`Ols`] or [`Quadratic`]) regardless of the pipeline's human proxy,
//! which makes their result optimal among samples of their size.
//!
//! A dataset with fewer points than the sample size yields all of its points.

use exemplar_components::{Ols, Quadratic};
use exemplar_core::{Dataset, Evaluator, HumanProxy, Observer};

use crate::{
    Action, Error, Event, Solution, Status,
    best::{Best, Flow},
    combinations::Combinations,
    score::score,
};

/// Finds the pair whose line best reproduces the dataset.
///
/// # Errors
///
/// Returns an error if a fit fails.
pub fn pairs<E, Obs>(dataset: &Dataset, evaluator: &E, observer: Obs) -> Result<Solution, Error>
where
    E: Evaluator,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search::<2, _, _, _>(dataset, &Ols, evaluator, observer)
}

/// Finds the pair whose line best reproduces the dataset, without observer
/// support.
///
/// # Errors
///
/// Returns an error if a fit fails.
pub fn pairs_unobserved<E: Evaluator>(dataset: &Dataset, evaluator: &E) -> Result<Solution, Error> {
    pairs(dataset, evaluator, ())
}

/// Finds the triple whose parabola best reproduces the dataset.
///
/// # Errors
///
/// Returns an error if a fit fails.
pub fn triples<E, Obs>(dataset: &Dataset, evaluator: &E, observer: Obs) -> Result<Solution, Error>
where
    E: Evaluator,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search::<3, _, _, _>(dataset, &Quadratic, evaluator, observer)
}

/// Finds the triple whose parabola best reproduces the dataset, without
/// observer support.
///
/// # Errors
///
/// Returns an error if a fit fails.
pub fn triples_unobserved<E: Evaluator>(
    dataset: &Dataset,
    evaluator: &E,
) -> Result<Solution, Error> {
    triples(dataset, evaluator, ())
}

fn search<const K: usize, H, E, Obs>(
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

    if dataset.len() < K {
        let all: Vec<usize> = (0..dataset.len()).collect();
        let distance = score(dataset, proxy, evaluator, &all)?;
        best.offer(&all, distance, &mut observer);
        return best.finish(dataset, Status::Complete);
    }

    for indices in Combinations::<K>::new(dataset.len()) {
        let distance = score(dataset, proxy, evaluator, &indices)?;
        if best.offer(&indices, distance, &mut observer) == Flow::Stop {
            return best.finish(dataset, Status::StoppedByObserver);
        }
    }

    best.finish(dataset, Status::Complete)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use exemplar_components::{Extrema, Line, Mse};
    use exemplar_core::Predict;

    fn parabola() -> Dataset {
        let xs: Vec<f64> = (0..8).map(f64::from).collect();
        let ys = xs.iter().map(|x| x * x - 3.0 * x + 1.0).collect();
        Dataset::new("parabola", xs, ys).unwrap()
    }

    #[test]
    fn pair_is_optimal_among_pairs() {
        let dataset = parabola();
        let solution = pairs_unobserved(&dataset, &Mse).unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.sample.len(), 2);
        assert_eq!(solution.evaluations, 28);

        for [i, j] in Combinations::<2>::new(dataset.len()) {
            let (x1, y1) = dataset.point(i);
            let (x2, y2) = dataset.point(j);
            let line = Line::least_squares(&[x1, x2], &[y1, y2]).unwrap();
            assert!(solution.distance <= Mse.evaluate(&dataset, &line));
        }
    }

    #[test]
    fn pair_on_a_line_is_exact() {
        let dataset =
            Dataset::new("line", vec![0.0, 1.0, 2.0, 3.0], vec![1.0, 3.0, 5.0, 7.0]).unwrap();
        let solution = pairs_unobserved(&dataset, &Mse).unwrap();

        assert_relative_eq!(solution.distance, 0.0);
        // Every pair is exact; ties keep the first.
        assert_eq!(solution.sample.indices(), &[0, 1]);
    }

    #[test]
    fn triple_recovers_parabola() {
        let dataset = parabola();
        let solution = triples_unobserved(&dataset, &Mse).unwrap();

        assert_eq!(solution.sample.len(), 3);
        assert_eq!(solution.evaluations, 56);
        assert_relative_eq!(solution.distance, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn triple_beats_pair_on_curved_data() {
        let dataset = parabola();
        let pair = pairs_unobserved(&dataset, &Mse).unwrap();
        let triple = triples_unobserved(&dataset, &Mse).unwrap();
        assert!(triple.distance < pair.distance);
    }

    #[test]
    fn sample_is_sorted_by_x() {
        let dataset = Dataset::new(
            "zigzag",
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            vec![0.0, 4.0, 1.0, 5.0, 2.0],
        )
        .unwrap();
        let solution = pairs_unobserved(&dataset, &Extrema).unwrap();
        let xs = solution.sample.xs();
        assert!(xs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn single_point_dataset_returns_that_point() {
        let dataset = Dataset::new("one", vec![2.0], vec![3.0]).unwrap();
        let solution = pairs_unobserved(&dataset, &Mse).unwrap();

        assert_eq!(solution.sample.indices(), &[0]);
        assert_relative_eq!(solution.distance, 0.0);
    }

    #[test]
    fn stops_when_observer_asks() {
        let dataset = parabola();
        let mut seen = 0;
        let observer = |event: &Event<'_>| -> Option<Action> {
            if let Event::Evaluated { .. } = event {
                seen += 1;
            }
            (seen == 5).then_some(Action::StopEarly)
        };

        let solution = pairs(&dataset, &Mse, observer).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.evaluations, 5);
    }

    #[test]
    fn best_line_predicts_from_sample() {
        let dataset = parabola();
        let solution = pairs_unobserved(&dataset, &Mse).unwrap();
        let line = Line::least_squares(solution.sample.xs(), solution.sample.ys()).unwrap();
        assert_relative_eq!(Mse.evaluate(&dataset, &line), solution.distance, epsilon = 1e-12);
        assert_eq!(line.predict(dataset.xs()).len(), dataset.len());
    }
}
