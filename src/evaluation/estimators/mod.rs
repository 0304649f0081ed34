mod ema_estimator;
mod estimator;
mod mean_estimator;

pub use ema_estimator::EmaEstimator;
pub use estimator::Estimator;
pub use mean_estimator::MeanEstimator;
