use std::io::{Error, ErrorKind};

use crate::evaluation::estimators::Estimator;

/// First-order exponential smoothing with reciprocal weight `1/k`:
/// `estimate = (1/k) * v + (1 - 1/k) * estimate`.
#[derive(Debug, Clone, Copy)]
pub struct EmaEstimator {
    weight: f64,
    estimate: f64,
}

impl EmaEstimator {
    /// Estimator with weight `1/k`, starting from `initial`.
    ///
    /// `k` must be at least 1 (weight in `(0, 1]`).
    pub fn new(k: u32, initial: f64) -> Result<Self, Error> {
        if k == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "EMA reciprocal weight k must be >= 1",
            ));
        }
        Ok(Self {
            weight: 1.0 / f64::from(k),
            estimate: initial,
        })
    }
}

impl Estimator for EmaEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        // Delta form of `w*v + (1-w)*estimate`; a constant input is an exact
        // fixed point under this form.
        self.estimate += self.weight * (v - self.estimate);
    }

    #[inline]
    fn estimation(&self) -> f64 {
        self.estimate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_k_is_rejected() {
        let err = EmaEstimator::new(0, 0.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn starts_at_initial_estimate() {
        let e = EmaEstimator::new(4, 42.0).unwrap();
        assert_eq!(e.estimation(), 42.0);
    }

    #[test]
    fn single_update_matches_formula() {
        let mut e = EmaEstimator::new(4, 100.0).unwrap();
        e.add(200.0);
        // 0.25 * 200 + 0.75 * 100
        assert_eq!(e.estimation(), 125.0);
    }

    #[test]
    fn constant_input_keeps_estimate_fixed() {
        let mut e = EmaEstimator::new(16, 127.0).unwrap();
        for _ in 0..1_000 {
            e.add(127.0);
            assert_eq!(e.estimation(), 127.0);
        }
    }

    #[test]
    fn k_one_tracks_newest_value_exactly() {
        let mut e = EmaEstimator::new(1, 0.0).unwrap();
        for v in [3.0, 250.0, 17.0] {
            e.add(v);
            assert_eq!(e.estimation(), v);
        }
    }

    #[test]
    fn converges_towards_constant_input() {
        let mut e = EmaEstimator::new(8, 0.0).unwrap();
        for _ in 0..10_000 {
            e.add(200.0);
        }
        assert!((e.estimation() - 200.0).abs() < 1e-9);
    }
}
