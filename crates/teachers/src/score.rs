use exemplar_core::{Dataset, Evaluator, FitError, HumanProxy, Sample};

/// Fits `proxy` on the points at `indices` (in x order) and scores the fit
/// against the whole dataset.
pub(crate) fn score<H, E>(
    dataset: &Dataset,
    proxy: &H,
    evaluator: &E,
    indices: &[usize],
) -> Result<f64, FitError>
where
    H: HumanProxy,
    E: Evaluator,
{
    let sample = Sample::from_indices(dataset, indices.iter().copied());
    let model = proxy.fit(sample.xs(), sample.ys())?;
    Ok(evaluator.evaluate(dataset, &model))
}
