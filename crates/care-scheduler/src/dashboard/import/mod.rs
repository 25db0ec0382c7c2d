mod parser;

use super::roster::{Roster, RosterError};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid caregiver CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("roster rejected: {0}")]
    Invalid(#[from] RosterError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Json,
    Csv,
}

impl RosterFormat {
    /// `.csv` files are caregiver exports; anything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Roster, RosterImportError> {
        let path = path.as_ref();
        let format = RosterFormat::from_path(path);
        debug!(path = %path.display(), ?format, "loading roster");
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, format)
    }

    pub fn from_reader<R: Read>(reader: R, format: RosterFormat) -> Result<Roster, RosterImportError> {
        let roster = match format {
            RosterFormat::Json => serde_json::from_reader::<_, Roster>(reader)?,
            RosterFormat::Csv => Roster::new(parser::parse_caregivers(reader)?, Vec::new()),
        };

        if let Err(err) = roster.validate() {
            warn!(error = %err, "roster failed validation");
            return Err(err.into());
        }

        debug!(
            caregivers = roster.caregivers.len(),
            visits = roster.visits.len(),
            "roster loaded"
        );
        Ok(roster)
    }
}
