use rand::Rng;

use crate::WINDOW;
use crate::evaluation::{Candidate, Estimator, MeanEstimator, Ranking, Score};
use crate::streams::UniformByteGenerator;
use crate::tasks::error::ExperimentError;
use crate::tasks::trial_simulator::TrialSimulator;

pub const DEFAULT_TRIAL_COUNT: usize = 1_000;
pub const DEFAULT_STREAM_LENGTH: usize = 300;

/// Runs many independent trials and ranks the candidates by the mean of
/// their per-trial average deviations.
///
/// Each trial owns a fresh generator and fresh estimator state; the only
/// cross-trial state is one streaming mean per candidate. Trial `t` is seeded
/// with `base_seed + t`, so a fixed seed makes the whole run reproducible
/// bit for bit.
#[derive(Debug)]
pub struct Experiment {
    trial_count: usize,
    stream_length: usize,
    candidates: Vec<Candidate>,
    seed: Option<u64>,
}

impl Experiment {
    pub fn new(
        trial_count: usize,
        stream_length: usize,
        candidates: Vec<Candidate>,
    ) -> Result<Self, ExperimentError> {
        if trial_count == 0 {
            return Err(ExperimentError::InvalidParameter(
                "trial_count must be > 0".into(),
            ));
        }
        if stream_length <= WINDOW {
            return Err(ExperimentError::InvalidParameter(format!(
                "stream_length must be > {WINDOW}"
            )));
        }
        if candidates.is_empty() {
            return Err(ExperimentError::InvalidParameter(
                "candidate set must not be empty".into(),
            ));
        }
        Ok(Self {
            trial_count,
            stream_length,
            candidates,
            seed: None,
        })
    }

    /// Fixes the base seed, making the run deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn run(&self) -> Result<Ranking, ExperimentError> {
        let base_seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let mut aggregates = vec![MeanEstimator::default(); self.candidates.len()];

        for trial in 0..self.trial_count {
            let generator = UniformByteGenerator::new(base_seed.wrapping_add(trial as u64));
            let mut simulator = TrialSimulator::new(
                Box::new(generator),
                self.candidates.clone(),
                self.stream_length,
            )?;
            let result = simulator.run()?;

            debug_assert_eq!(result.scores().len(), aggregates.len());
            for (aggregate, score) in aggregates.iter_mut().zip(result.scores()) {
                aggregate.add(score.deviation);
            }

            if (trial + 1) % 100 == 0 {
                log::debug!("completed {} of {} trials", trial + 1, self.trial_count);
            }
        }

        let scores = self
            .candidates
            .iter()
            .zip(&aggregates)
            .map(|(&candidate, aggregate)| Score::new(candidate, aggregate.estimation()))
            .collect();
        Ok(Ranking::from_scores(scores))
    }
}

impl Default for Experiment {
    /// The canonical run: 1000 trials of 300-value streams over the full
    /// candidate set, seeded from OS entropy.
    fn default() -> Self {
        Self {
            trial_count: DEFAULT_TRIAL_COUNT,
            stream_length: DEFAULT_STREAM_LENGTH,
            candidates: Candidate::all(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(result: Result<Experiment, ExperimentError>) {
        match result {
            Err(ExperimentError::InvalidParameter(_)) => {}
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn ctor_guards() {
        assert_invalid(Experiment::new(0, 300, Candidate::all()));
        assert_invalid(Experiment::new(10, WINDOW, Candidate::all()));
        assert_invalid(Experiment::new(10, 300, vec![]));
    }

    #[test]
    fn ranking_covers_every_candidate_once() {
        let experiment = Experiment::new(3, 80, Candidate::all())
            .unwrap()
            .with_seed(7);
        let ranking = experiment.run().unwrap();

        assert_eq!(ranking.len(), Candidate::all().len());
        for candidate in Candidate::all() {
            assert_eq!(
                ranking
                    .entries()
                    .iter()
                    .filter(|s| s.candidate == candidate)
                    .count(),
                1,
                "candidate {candidate}"
            );
        }
    }

    #[test]
    fn ranking_is_sorted_ascending() {
        let experiment = Experiment::new(20, 150, Candidate::all())
            .unwrap()
            .with_seed(2025);
        let ranking = experiment.run().unwrap();

        for pair in ranking.entries().windows(2) {
            assert!(pair[0].deviation <= pair[1].deviation);
        }
    }

    #[test]
    fn fixed_seed_reproduces_the_run_bit_for_bit() {
        let build = || {
            Experiment::new(10, 100, Candidate::all())
                .unwrap()
                .with_seed(424242)
        };
        let first = build().run().unwrap();
        let second = build().run().unwrap();

        assert_eq!(first.len(), second.len());
        for (a, b) in first.entries().iter().zip(second.entries()) {
            assert_eq!(a.candidate, b.candidate);
            assert_eq!(a.deviation.to_bits(), b.deviation.to_bits());
        }
    }

    #[test]
    fn single_trial_aggregate_equals_that_trial() {
        let seed = 99;
        let experiment = Experiment::new(1, 65, Candidate::all())
            .unwrap()
            .with_seed(seed);
        let ranking = experiment.run().unwrap();

        // Trial 0 of the experiment uses the base seed unchanged.
        let mut simulator = TrialSimulator::new(
            Box::new(UniformByteGenerator::new(seed)),
            Candidate::all(),
            65,
        )
        .unwrap();
        let trial = simulator.run().unwrap();

        for score in ranking.entries() {
            let expected = trial.deviation_for(score.candidate).unwrap();
            assert_eq!(score.deviation.to_bits(), expected.to_bits());
        }
    }
}
