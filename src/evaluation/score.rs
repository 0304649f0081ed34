use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::evaluation::Candidate;

/// One candidate's average absolute deviation, within a trial or aggregated
/// across trials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub candidate: Candidate,
    pub deviation: f64,
}

impl Score {
    #[inline]
    pub fn new(candidate: Candidate, deviation: f64) -> Self {
        Self {
            candidate,
            deviation,
        }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.candidate {
            Candidate::Ema(k) => write!(f, "1 / {k:<2}  =  {}", self.deviation),
            Candidate::TotalAverage => write!(f, " TOTAL  =  {}", self.deviation),
        }
    }
}
