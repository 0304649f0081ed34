use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io::{Error, ErrorKind};

use crate::evaluation::estimators::{EmaEstimator, Estimator, MeanEstimator};
use crate::utils::math::trailing_mean;

/// Smallest reciprocal weight in the canonical candidate set.
pub const EMA_MIN_K: u32 = 2;
/// Largest reciprocal weight in the canonical candidate set.
pub const EMA_MAX_K: u32 = 64;

/// One smoothing scheme under comparison.
///
/// `Ema(k)` places weight `1/k` on the newest sample; `TotalAverage` is the
/// running mean of every value seen so far, trailing window included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Candidate {
    Ema(u32),
    TotalAverage,
}

impl Candidate {
    /// The canonical candidate set: `Ema(2)..=Ema(64)`, then `TotalAverage`.
    ///
    /// The set is fixed for a whole run; trials never add or remove members.
    pub fn all() -> Vec<Candidate> {
        (EMA_MIN_K..=EMA_MAX_K)
            .map(Candidate::Ema)
            .chain(std::iter::once(Candidate::TotalAverage))
            .collect()
    }

    /// Builds this candidate's estimator, primed with the initial window.
    ///
    /// EMA candidates start from the window mean; the total-average candidate
    /// starts from the window sum and count, so its estimate stays the mean
    /// of the entire stream as values arrive.
    pub fn estimator(&self, window: &[u8]) -> Result<Box<dyn Estimator>, Error> {
        if window.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "initial window must not be empty",
            ));
        }
        match *self {
            Candidate::Ema(k) => {
                let mean = trailing_mean(window, window.len());
                Ok(Box::new(EmaEstimator::new(k, mean)?))
            }
            Candidate::TotalAverage => {
                let sum: f64 = window.iter().map(|&v| f64::from(v)).sum();
                Ok(Box::new(MeanEstimator::with_seed(sum, window.len())))
            }
        }
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match *self {
            Candidate::Ema(k) => write!(f, "1/{k}"),
            Candidate::TotalAverage => write!(f, "TOTAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_set_is_ema_2_to_64_then_total() {
        let all = Candidate::all();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Candidate::Ema(2));
        assert_eq!(all[62], Candidate::Ema(64));
        assert_eq!(all[63], Candidate::TotalAverage);
    }

    #[test]
    fn ema_estimator_starts_at_window_mean() {
        let window = [10u8, 20, 30, 40];
        let e = Candidate::Ema(8).estimator(&window).unwrap();
        assert_eq!(e.estimation(), 25.0);
    }

    #[test]
    fn total_average_estimator_starts_at_window_mean_and_keeps_history() {
        let window = [10u8, 20, 30, 40];
        let mut e = Candidate::TotalAverage.estimator(&window).unwrap();
        assert_eq!(e.estimation(), 25.0);

        e.add(100.0);
        // (10 + 20 + 30 + 40 + 100) / 5
        assert_eq!(e.estimation(), 40.0);
    }

    #[test]
    fn empty_window_is_rejected() {
        let err = Candidate::Ema(2).estimator(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn display_forms() {
        assert_eq!(Candidate::Ema(17).to_string(), "1/17");
        assert_eq!(Candidate::TotalAverage.to_string(), "TOTAL");
    }
}
