/// Online scalar estimator (e.g., streaming mean, exponential smoothing).
///
/// Implementations accept values incrementally via [`add`] and expose the
/// current estimate via [`estimation`].
///
/// [`add`]: Estimator::add
/// [`estimation`]: Estimator::estimation
pub trait Estimator: std::fmt::Debug {
    /// Incorporates a new observation.
    fn add(&mut self, v: f64);

    /// Returns the current estimate.
    fn estimation(&self) -> f64;
}
