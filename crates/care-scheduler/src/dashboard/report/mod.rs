mod detail;
pub mod views;

pub use detail::caregiver_detail;
pub use views::{CaregiverDetailView, CaregiverWorkloadView, DashboardSummary};

use super::filters::{CaregiverFilters, DashboardView};
use super::heatmap::{build_heatmap, HeatmapWindow};
use super::insights::generate_insights;
use super::roster::{Caregiver, Roster};
use super::workload::{sort_by_workload, WorkloadSummary};

/// Caregivers selected for one dashboard screen.
#[derive(Debug)]
pub struct DashboardReport<'a> {
    pub filters: CaregiverFilters,
    pub total_caregivers: usize,
    pub caregivers: Vec<&'a Caregiver>,
    pub window: HeatmapWindow,
}

impl<'a> DashboardReport<'a> {
    /// Filters the roster and orders the result the way the active view shows it.
    pub fn build(roster: &'a Roster, filters: CaregiverFilters, window: HeatmapWindow) -> Self {
        let filtered = filters.apply(&roster.caregivers);
        let caregivers = match filters.view {
            DashboardView::Workload => sort_by_workload(filtered),
            DashboardView::List | DashboardView::Heatmap => filtered,
        };

        Self {
            filters,
            total_caregivers: roster.caregivers.len(),
            caregivers,
            window,
        }
    }

    pub fn summary(&self) -> DashboardSummary {
        let view = self.filters.view;
        let heatmap = (view == DashboardView::Heatmap)
            .then(|| build_heatmap(self.caregivers.iter().copied(), &self.window));

        DashboardSummary {
            view,
            view_label: view.label(),
            filters: self.filters.clone(),
            total_caregivers: self.total_caregivers,
            caregivers: self
                .caregivers
                .iter()
                .map(|caregiver| CaregiverWorkloadView::from_caregiver(caregiver))
                .collect(),
            summary: WorkloadSummary::from_records(self.caregivers.iter().copied()),
            insights: generate_insights(self.caregivers.iter().copied()),
            heatmap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::filters::Selection;
    use crate::dashboard::workload::WorkloadStatus;
    use chrono::NaiveDate;

    fn window() -> HeatmapWindow {
        HeatmapWindow::week_of(NaiveDate::from_ymd_opt(2025, 3, 17).expect("valid date"))
    }

    #[test]
    fn workload_view_orders_overloaded_first() {
        let roster = Roster::demo();
        let filters = CaregiverFilters {
            view: DashboardView::Workload,
            ..CaregiverFilters::default()
        };

        let summary = DashboardReport::build(&roster, filters, window()).summary();
        let statuses: Vec<_> = summary
            .caregivers
            .iter()
            .map(|caregiver| caregiver.workload)
            .collect();
        assert_eq!(
            statuses,
            [
                WorkloadStatus::Overloaded,
                WorkloadStatus::NearLimit,
                WorkloadStatus::Optimal,
                WorkloadStatus::Underutilized,
                WorkloadStatus::Inactive,
            ]
        );
        assert!(summary.heatmap.is_none());
    }

    #[test]
    fn list_view_keeps_roster_order() {
        let roster = Roster::demo();
        let summary =
            DashboardReport::build(&roster, CaregiverFilters::default(), window()).summary();
        let ids: Vec<_> = summary
            .caregivers
            .iter()
            .map(|caregiver| caregiver.id.clone())
            .collect();
        let expected: Vec<_> = roster
            .caregivers
            .iter()
            .map(|caregiver| caregiver.id.clone())
            .collect();
        assert_eq!(ids, expected);
        assert_eq!(summary.total_caregivers, roster.caregivers.len());
    }

    #[test]
    fn heatmap_view_with_toggle_keeps_only_overbooked_rows() {
        let roster = Roster::demo();
        let filters = CaregiverFilters {
            view: DashboardView::Heatmap,
            overbooked_only: true,
            ..CaregiverFilters::default()
        };

        let summary = DashboardReport::build(&roster, filters, window()).summary();
        assert_eq!(summary.caregivers.len(), 1);
        assert_eq!(summary.caregivers[0].name, "Maria Lopez");
        let heatmap = summary.heatmap.expect("heatmap rows");
        assert_eq!(heatmap.len(), 1);
        assert!(heatmap[0].overbooked);
    }

    #[test]
    fn insights_follow_the_filtered_slice() {
        let roster = Roster::demo();
        let filters = CaregiverFilters {
            region: Selection::only("South"),
            ..CaregiverFilters::default()
        };

        let summary = DashboardReport::build(&roster, filters, window()).summary();
        assert_eq!(summary.caregivers.len(), 1);
        assert_eq!(summary.insights.len(), 1);
        assert_eq!(summary.insights[0].caregivers, ["James Carter"]);
        assert_eq!(summary.summary.count(WorkloadStatus::Underutilized), 1);
    }
}
