use super::filters::{CaregiverFilters, DashboardView};
use super::heatmap::{build_heatmap, HeatmapRow, HeatmapWindow, DEFAULT_WINDOW_DAYS};
use super::insights::{generate_insights, WorkloadInsight};
use super::listings::{PatientFilters, PatientListEntry, VisitFilters, VisitListing};
use super::report::{caregiver_detail, CaregiverDetailView, DashboardReport, DashboardSummary};
use super::roster::{CaregiverId, Roster};
use chrono::{Local, NaiveDate};

/// Read-only facade over one roster snapshot.
#[derive(Debug, Clone)]
pub struct DashboardService {
    roster: Roster,
    heatmap_days: u32,
}

impl DashboardService {
    pub fn new(roster: Roster) -> Self {
        Self::with_heatmap_days(roster, DEFAULT_WINDOW_DAYS)
    }

    pub fn with_heatmap_days(roster: Roster, heatmap_days: u32) -> Self {
        Self {
            roster,
            heatmap_days,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Window starting at `start`, or at the first logged day of the roster.
    pub fn heatmap_window(&self, start: Option<NaiveDate>, days: Option<u32>) -> HeatmapWindow {
        let start = start
            .or_else(|| self.first_logged_day())
            .unwrap_or_else(|| Local::now().date_naive());
        HeatmapWindow::new(start, days.unwrap_or(self.heatmap_days))
    }

    fn first_logged_day(&self) -> Option<NaiveDate> {
        self.roster
            .caregivers
            .iter()
            .filter_map(|caregiver| caregiver.utilization.keys().next().copied())
            .min()
    }

    pub fn dashboard(&self, filters: CaregiverFilters, window: HeatmapWindow) -> DashboardSummary {
        DashboardReport::build(&self.roster, filters, window).summary()
    }

    pub fn caregiver(&self, id: &CaregiverId) -> Option<CaregiverDetailView> {
        caregiver_detail(&self.roster, id)
    }

    pub fn insights(&self) -> Vec<WorkloadInsight> {
        generate_insights(&self.roster.caregivers)
    }

    /// Heatmap rows for the caregivers the heatmap view would show.
    pub fn heatmap(&self, filters: CaregiverFilters, window: &HeatmapWindow) -> Vec<HeatmapRow> {
        let filters = CaregiverFilters {
            view: DashboardView::Heatmap,
            ..filters
        };
        build_heatmap(filters.apply(&self.roster.caregivers), window)
    }

    pub fn patients(&self, filters: &PatientFilters) -> Vec<PatientListEntry> {
        filters.apply(&self.roster)
    }

    pub fn visits(&self, filters: &VisitFilters) -> VisitListing {
        filters.apply(&self.roster.visits)
    }
}
