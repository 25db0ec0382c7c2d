use care_scheduler::dashboard::{Roster, RosterImporter};
use care_scheduler::error::AppError;
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the roster file, or the built-in demo roster when none is given.
pub(crate) fn load_roster(path: Option<&Path>) -> Result<Roster, AppError> {
    match path {
        Some(path) => {
            let roster = RosterImporter::from_path(path)?;
            info!(
                path = %path.display(),
                caregivers = roster.caregivers.len(),
                visits = roster.visits.len(),
                "roster loaded"
            );
            Ok(roster)
        }
        None => {
            info!("no roster configured; serving the demo roster");
            Ok(Roster::demo())
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
