use exemplar_core::{Dataset, Evaluator, HumanProxy, Observer, Predict, Sample};
use exemplar_teachers::{
    Action, Event, Solution, exhaustive, greedy, hill_climb,
    path::{self, MemoStore},
};
use rand::{SeedableRng, rngs::StdRng};
use tracing::{info, warn};

use crate::{
    ConfigurationError, DataDir, Error, EvaluatorName, PipelineSpec, ProxyName, Report,
    TeacherName,
};

/// A validated combination of human proxy, teacher, and evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipeline {
    proxy: ProxyName,
    teacher: Teacher,
    evaluator: EvaluatorName,
}

/// A teacher with its settings resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Teacher {
    Pair,
    Triple,
    Path(path::Config),
    Greedy,
    HillClimb {
        config: hill_climb::Config,
        seed: Option<u64>,
    },
}

impl Pipeline {
    /// Creates a pipeline with the teacher's default settings.
    ///
    /// A hill-climb built this way is unseeded.
    #[must_use]
    pub fn new(proxy: ProxyName, teacher: TeacherName, evaluator: EvaluatorName) -> Self {
        let teacher = match teacher {
            TeacherName::Pair => Teacher::Pair,
            TeacherName::Triple => Teacher::Triple,
            TeacherName::Path => Teacher::Path(path::Config::default()),
            TeacherName::Greedy => Teacher::Greedy,
            TeacherName::HillClimb => Teacher::HillClimb {
                config: hill_climb::Config::default(),
                seed: None,
            },
        };
        Self {
            proxy,
            teacher,
            evaluator,
        }
    }

    /// Creates a pipeline from a spec, resolving names and validating settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is not in its registry or a setting is out
    /// of range for the chosen teacher.
    pub fn from_spec(spec: &PipelineSpec) -> Result<Self, ConfigurationError> {
        let proxy: ProxyName = spec.proxy.parse()?;
        let teacher_name: TeacherName = spec.teacher.parse()?;
        let evaluator: EvaluatorName = spec.evaluator.parse()?;

        let teacher = match teacher_name {
            TeacherName::Path => Teacher::Path(match spec.depth {
                Some(depth) => path::Config::new(depth)?,
                None => path::Config::default(),
            }),
            TeacherName::HillClimb => {
                let defaults = hill_climb::Config::default();
                Teacher::HillClimb {
                    config: hill_climb::Config::new(
                        spec.restarts.unwrap_or(defaults.restarts()),
                        spec.sample_size.unwrap_or(defaults.sample_size()),
                        spec.patience.unwrap_or(defaults.patience()),
                    )?,
                    seed: spec.seed,
                }
            }
            other => Self::new(proxy, other, evaluator).teacher,
        };

        warn_ignored(spec, teacher_name);

        Ok(Self {
            proxy,
            teacher,
            evaluator,
        })
    }

    /// Returns the proxy name.
    #[must_use]
    pub fn proxy(&self) -> ProxyName {
        self.proxy
    }

    /// Returns the teacher name.
    #[must_use]
    pub fn teacher(&self) -> TeacherName {
        match self.teacher {
            Teacher::Pair => TeacherName::Pair,
            Teacher::Triple => TeacherName::Triple,
            Teacher::Path(_) => TeacherName::Path,
            Teacher::Greedy => TeacherName::Greedy,
            Teacher::HillClimb { .. } => TeacherName::HillClimb,
        }
    }

    /// Returns the evaluator name.
    #[must_use]
    pub fn evaluator(&self) -> EvaluatorName {
        self.evaluator
    }

    /// Runs the teacher on `dataset`.
    ///
    /// The store is used by the path search only.
    ///
    /// # Errors
    ///
    /// Returns an error if the search fails.
    pub fn generate_sample(
        &self,
        dataset: &Dataset,
        store: &mut dyn MemoStore,
    ) -> Result<Solution, Error> {
        self.generate_sample_observed(dataset, store, ())
    }

    /// Runs the teacher on `dataset`, reporting its progress to `observer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the search fails.
    pub fn generate_sample_observed<Obs>(
        &self,
        dataset: &Dataset,
        store: &mut dyn MemoStore,
        observer: Obs,
    ) -> Result<Solution, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let proxy = self.proxy.proxy();
        let evaluator = self.evaluator.evaluator();

        info!(
            dataset = dataset.name(),
            points = dataset.len(),
            proxy = %self.proxy,
            teacher = %self.teacher(),
            evaluator = %self.evaluator,
            "generating sample"
        );

        let solution = match self.teacher {
            Teacher::Pair => exhaustive::pairs(dataset, &evaluator, observer)?,
            Teacher::Triple => exhaustive::triples(dataset, &evaluator, observer)?,
            Teacher::Path(config) => path::select(dataset, &evaluator, store, &config, observer)?,
            Teacher::Greedy => greedy::select(dataset, &proxy, &evaluator, observer)?,
            Teacher::HillClimb { config, seed } => {
                let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
                hill_climb::select(dataset, &proxy, &evaluator, &mut rng, &config, observer)?
            }
        };

        Ok(solution)
    }

    /// Refits the proxy on `sample` and scores it against all of `dataset`.
    ///
    /// Unlike a teacher's own distance, this number is comparable across
    /// teachers that share an evaluator.
    ///
    /// # Errors
    ///
    /// Returns an error if the fit fails.
    pub fn score(&self, dataset: &Dataset, sample: &Sample) -> Result<f64, Error> {
        let model = self.proxy.proxy().fit(sample.xs(), sample.ys())?;
        Ok(self.evaluator.evaluator().evaluate(dataset, &model))
    }

    /// Generates a sample and reports it with the refit proxy's predictions.
    ///
    /// # Errors
    ///
    /// Returns an error if the search or the refit fails.
    pub fn run(&self, dataset: &Dataset, store: &mut dyn MemoStore) -> Result<Report, Error> {
        let solution = self.generate_sample(dataset, store)?;
        let score = self.score(dataset, &solution.sample)?;

        let model = self
            .proxy
            .proxy()
            .fit(solution.sample.xs(), solution.sample.ys())?;

        info!(
            dataset = dataset.name(),
            size = solution.sample.len(),
            distance = solution.distance,
            score,
            "pipeline finished"
        );

        Ok(Report {
            prediction: model.predict(dataset.xs()),
            x: dataset.xs().to_vec(),
            sample: solution.sample,
            distance: solution.distance,
            score,
        })
    }
}

/// Loads `name` from `data`, builds the pipeline described by `spec`, and
/// runs it.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] or [`Error::InvalidConfiguration`] before
/// any search runs, or a search or fit error afterwards.
pub fn run_file(
    data: &DataDir,
    name: &str,
    spec: &PipelineSpec,
    store: &mut dyn MemoStore,
) -> Result<Report, Error> {
    let dataset = data.load(name)?;
    let pipeline = Pipeline::from_spec(spec)?;
    pipeline.run(&dataset, store)
}

fn warn_ignored(spec: &PipelineSpec, teacher: TeacherName) {
    let path = teacher == TeacherName::Path;
    let climb = teacher == TeacherName::HillClimb;

    for (setting, ignored) in [
        ("depth", spec.depth.is_some() && !path),
        ("restarts", spec.restarts.is_some() && !climb),
        ("sample_size", spec.sample_size.is_some() && !climb),
        ("patience", spec.patience.is_some() && !climb),
        ("seed", spec.seed.is_some() && !climb),
    ] {
        if ignored {
            warn!(setting, %teacher, "setting ignored by teacher");
        }
    }
}
