use std::ops::RangeInclusive;

use exemplar_components::{Line, Ols};
use exemplar_core::{Dataset, Evaluator, FitError, Observer, Predict};
use tracing::{debug, info, warn};

use crate::{
    Action, Error, Event, Solution, Status,
    best::{Best, Flow},
    score::score,
};

use super::{Config, Entry, MemoStore, MemoTable, StoreError};

pub(super) fn search<E, S, Obs>(
    dataset: &Dataset,
    evaluator: &E,
    store: &mut S,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    E: Evaluator,
    S: MemoStore + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let n = dataset.len();
    if n < 2 {
        let mut best = Best::empty();
        let distance = score(dataset, &Ols, evaluator, &[0])?;
        best.offer(&[0], distance, &mut observer);
        return best.finish(dataset, Status::Complete);
    }

    let depth = config.depth().min(n);
    let remaining = depth - 2;
    let last = n - 1;

    let mut memo = load(dataset, evaluator, store)?;
    let mut segments = Segments {
        dataset,
        evaluator,
        fits: 0,
    };
    let mut best = Best::empty();
    let mut status = Status::Complete;

    'pairs: for i in 0..last {
        for j in i + 1..=last {
            if j + remaining > last {
                break;
            }
            let Some(rest) = segments.best_next(&mut memo, j, remaining)? else {
                continue;
            };

            let end = if remaining == 0 { last } else { j };
            let distance = segments.cost(i, j, 0..=end)? + rest;

            let chain = chain(&memo, i, j, remaining);
            if best.offer(&chain, distance, &mut observer) == Flow::Stop {
                status = Status::StoppedByObserver;
                break 'pairs;
            }
        }
    }

    // Every populated entry is final, so an early stop still flushes.
    store.save(dataset.name(), &memo)?;

    let mut solution = best.finish(dataset, status)?;
    solution.evaluations = segments.fits;

    info!(
        dataset = dataset.name(),
        depth,
        distance = solution.distance,
        fits = solution.evaluations,
        "path search finished"
    );
    Ok(solution)
}

/// Loads the stored table for the dataset, or starts an empty one.
fn load<E, S>(dataset: &Dataset, evaluator: &E, store: &mut S) -> Result<MemoTable, StoreError>
where
    E: Evaluator,
    S: MemoStore + ?Sized,
{
    let (len, name) = (dataset.len(), evaluator.name());
    let stored = match store.load(dataset.name()) {
        Ok(stored) => stored,
        Err(StoreError::Format(error)) => {
            warn!(dataset = dataset.name(), %error, "discarding unreadable memo table");
            None
        }
        Err(error) => return Err(error),
    };
    match stored {
        Some(table) if table.is_compatible(len, name) => {
            debug!(
                dataset = dataset.name(),
                populated = table.populated(),
                "reusing memo table"
            );
            Ok(table)
        }
        Some(table) => {
            warn!(
                dataset = dataset.name(),
                stored_len = table.len(),
                stored_evaluator = table.evaluator(),
                len,
                evaluator = name,
                "discarding incompatible memo table"
            );
            Ok(MemoTable::new(len, name))
        }
        None => Ok(MemoTable::new(len, name)),
    }
}

/// Follows the memoized continuation from a starting pair.
fn chain(memo: &MemoTable, first: usize, second: usize, remaining: usize) -> Vec<usize> {
    let mut chain = Vec::with_capacity(remaining + 2);
    chain.extend([first, second]);

    let mut k = second;
    for r in (1..=remaining).rev() {
        match memo.get(k, r) {
            Some(Entry::Chain { next, .. }) => {
                chain.push(next);
                k = next;
            }
            Some(Entry::NoChain) | None => break,
        }
    }
    chain
}

/// Scores straight segments and solves memoized subproblems.
struct Segments<'a, E> {
    dataset: &'a Dataset,
    evaluator: &'a E,
    fits: usize,
}

impl<E: Evaluator> Segments<'_, E> {
    /// Distance of the line through `from` and `to`, scored over `window`.
    fn cost(
        &mut self,
        from: usize,
        to: usize,
        window: RangeInclusive<usize>,
    ) -> Result<f64, FitError> {
        self.fits += 1;

        let (x1, y1) = self.dataset.point(from);
        let (x2, y2) = self.dataset.point(to);
        let line = Line::least_squares(&[x1, x2], &[y1, y2])?;

        let (xs, ys) = self.dataset.window(window);
        Ok(self.evaluator.distance(ys, &line.predict(xs)))
    }

    /// Cost of the best chain of `remaining` picks after `prev`, or `None`
    /// if no such chain fits before the end of the series.
    fn best_next(
        &mut self,
        memo: &mut MemoTable,
        prev: usize,
        remaining: usize,
    ) -> Result<Option<f64>, FitError> {
        if remaining == 0 {
            return Ok(Some(0.0));
        }
        match memo.get(prev, remaining) {
            Some(Entry::Chain { distance, .. }) => return Ok(Some(distance)),
            Some(Entry::NoChain) => return Ok(None),
            None => {}
        }

        let last = self.dataset.len() - 1;
        let mut best: Option<(usize, f64)> = None;

        for i in prev + 1..=last {
            // The picks after `i` need room before the end.
            if i + (remaining - 1) > last {
                break;
            }
            let Some(rest) = self.best_next(memo, i, remaining - 1)? else {
                continue;
            };

            let end = if remaining == 1 { last } else { i };
            let distance = self.cost(prev, i, prev + 1..=end)? + rest;

            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((i, distance));
            }
        }

        let entry = best.map_or(Entry::NoChain, |(next, distance)| Entry::Chain {
            next,
            distance,
        });
        memo.set(prev, remaining, entry);

        Ok(best.map(|(_, distance)| distance))
    }
}
