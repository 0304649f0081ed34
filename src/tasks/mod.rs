mod error;
mod experiment;
mod trial_simulator;

pub use error::ExperimentError;
pub use experiment::{DEFAULT_STREAM_LENGTH, DEFAULT_TRIAL_COUNT, Experiment};
pub use trial_simulator::{TrialResult, TrialSimulator};
