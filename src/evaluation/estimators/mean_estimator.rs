use crate::evaluation::estimators::Estimator;

/// Streaming mean estimator: `mean = sum / len`.
///
/// Doubles as the full-history ("TOTAL") candidate when seeded with the
/// initial window via [`with_seed`], and as the column-wise aggregator that
/// averages per-trial deviations across trials.
///
/// [`with_seed`]: MeanEstimator::with_seed
#[derive(Debug, Default, Clone, Copy)]
pub struct MeanEstimator {
    len: f64,
    sum: f64,
}

impl MeanEstimator {
    /// Estimator primed as if `len` values summing to `sum` were already
    /// added.
    pub fn with_seed(sum: f64, len: usize) -> Self {
        Self {
            len: len as f64,
            sum,
        }
    }
}

impl Estimator for MeanEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1.0;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0.0 {
            self.sum / self.len
        } else {
            f64::NAN
        }
    }
}
