use std::fmt::{Display, Formatter, Result as FmtResult};
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

use crate::evaluation::Score;

pub enum RankingFormat {
    Csv,
    Tsv,
    Json,
}

/// Candidates ordered ascending by aggregate deviation (best first).
///
/// Built with [`from_scores`], which sorts stably: ties keep the candidate
/// insertion order.
///
/// [`from_scores`]: Ranking::from_scores
pub struct Ranking {
    entries: Vec<Score>,
}

impl Ranking {
    pub fn from_scores(mut scores: Vec<Score>) -> Self {
        scores.sort_by(|a, b| a.deviation.total_cmp(&b.deviation));
        Self { entries: scores }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Score] {
        &self.entries
    }

    /// The lowest-deviation candidate, if any.
    pub fn best(&self) -> Option<Score> {
        self.entries.first().copied()
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: RankingFormat) -> Result<(), Error> {
        match fmt {
            RankingFormat::Csv => self.export_with_delimiter(path, ','),
            RankingFormat::Tsv => self.export_with_delimiter(path, '\t'),
            RankingFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = File::create(path)?;
        writeln!(w, "candidate{d}deviation", d = delimiter)?;
        for s in &self.entries {
            writeln!(w, "{}{d}{:.12}", s.candidate, s.deviation, d = delimiter)?;
        }
        Ok(())
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = File::create(path)?;
        writeln!(w, "[")?;
        for (i, s) in self.entries.iter().enumerate() {
            writeln!(
                w,
                "  {{\"candidate\":\"{}\",\"deviation\":{}}}{}",
                s.candidate,
                s.deviation,
                if i + 1 == self.entries.len() { "" } else { "," }
            )?;
        }
        writeln!(w, "]")?;
        Ok(())
    }
}

impl Display for Ranking {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for s in &self.entries {
            writeln!(f, "{s}")?;
        }
        Ok(())
    }
}
