use std::io::{Error, ErrorKind};

use crate::WINDOW;
use crate::evaluation::{Candidate, Estimator, MeanEstimator, Score};
use crate::streams::ByteStream;
use crate::utils::math::trailing_mean;

/// Per-candidate average absolute deviations measured over one trial.
///
/// Scores appear in the candidate order the simulator was built with.
#[derive(Debug, Clone)]
pub struct TrialResult {
    scores: Vec<Score>,
}

impl TrialResult {
    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn deviation_for(&self, candidate: Candidate) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.candidate == candidate)
            .map(|s| s.deviation)
    }
}

/// Runs one trial: drives a byte stream to `stream_length` values and
/// measures, for every candidate, the average absolute deviation between its
/// running estimate and the trailing-window mean.
///
/// The stream is materialized in full and the reference mean is recomputed
/// from the tail at every step; nothing about the reference is incremental,
/// so it cannot drift.
pub struct TrialSimulator {
    stream: Box<dyn ByteStream>,
    candidates: Vec<Candidate>,
    stream_length: usize,
    values: Vec<u8>,
}

impl TrialSimulator {
    pub fn new(
        stream: Box<dyn ByteStream>,
        candidates: Vec<Candidate>,
        stream_length: usize,
    ) -> Result<Self, Error> {
        if stream_length <= WINDOW {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("stream_length must be > {WINDOW}"),
            ));
        }
        if candidates.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "candidate set must not be empty",
            ));
        }
        Ok(Self {
            stream,
            candidates,
            stream_length,
            values: Vec::with_capacity(stream_length),
        })
    }

    pub fn run(&mut self) -> Result<TrialResult, Error> {
        self.values.clear();
        for _ in 0..WINDOW {
            let v = self.draw()?;
            self.values.push(v);
        }

        let mut estimators: Vec<Box<dyn Estimator>> = self
            .candidates
            .iter()
            .map(|c| c.estimator(&self.values))
            .collect::<Result<_, _>>()?;
        let mut deviations = vec![MeanEstimator::default(); self.candidates.len()];

        while self.values.len() < self.stream_length {
            let added = self.draw()?;
            self.values.push(added);
            let exact = trailing_mean(&self.values, WINDOW);

            for (estimator, deviation) in estimators.iter_mut().zip(deviations.iter_mut()) {
                estimator.add(f64::from(added));
                deviation.add((exact - estimator.estimation()).abs());
            }
        }

        let scores = self
            .candidates
            .iter()
            .zip(&deviations)
            .map(|(&candidate, deviation)| Score::new(candidate, deviation.estimation()))
            .collect();
        Ok(TrialResult { scores })
    }

    /// The values generated so far (initial window first).
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    fn draw(&mut self) -> Result<u8, Error> {
        self.stream.next_value().ok_or_else(|| {
            Error::new(
                ErrorKind::UnexpectedEof,
                format!(
                    "stream ended after {} of {} values",
                    self.values.len(),
                    self.stream_length
                ),
            )
        })
    }
}
