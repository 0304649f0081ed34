mod candidate;
mod estimators;
mod ranking;
mod score;

pub use candidate::{Candidate, EMA_MAX_K, EMA_MIN_K};
pub use estimators::{EmaEstimator, Estimator, MeanEstimator};
pub use ranking::{Ranking, RankingFormat};
pub use score::Score;
