use super::super::filters::{CaregiverFilters, DashboardView};
use super::super::heatmap::HeatmapRow;
use super::super::insights::WorkloadInsight;
use super::super::listings::VisitListEntry;
use super::super::roster::{Caregiver, CaregiverId, DailyUtilization, Patient};
use super::super::workload::{self, WorkloadSeverity, WorkloadStatus, WorkloadSummary};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaregiverWorkloadView {
    pub id: CaregiverId,
    pub name: String,
    pub role: String,
    pub specialty: String,
    pub region: String,
    pub status: String,
    pub assigned_hours: f64,
    pub max_hours: f64,
    pub load_percent: f64,
    pub workload: WorkloadStatus,
    pub workload_label: &'static str,
    pub severity: WorkloadSeverity,
    pub color: &'static str,
    pub patients: u32,
    pub visits: u32,
}

impl CaregiverWorkloadView {
    pub fn from_caregiver(caregiver: &Caregiver) -> Self {
        let classification = workload::classify(caregiver.assigned_hours, caregiver.max_hours);
        Self {
            id: caregiver.id.clone(),
            name: caregiver.name.clone(),
            role: caregiver.role.clone(),
            specialty: caregiver.specialty.clone(),
            region: caregiver.region.clone(),
            status: caregiver.status.clone(),
            assigned_hours: caregiver.assigned_hours,
            max_hours: caregiver.max_hours,
            load_percent: classification.load_percent,
            workload: classification.status,
            workload_label: classification.label,
            severity: classification.severity,
            color: classification.color,
            patients: caregiver.patients,
            visits: caregiver.visits,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationEntry {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub day: DailyUtilization,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaregiverDetailView {
    #[serde(flatten)]
    pub workload: CaregiverWorkloadView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub logged_hours: f64,
    pub logged_percent: f64,
    pub overbooked: bool,
    pub utilization: Vec<UtilizationEntry>,
    pub patients_list: Vec<Patient>,
    pub scheduled_visits: Vec<VisitListEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub view: DashboardView,
    pub view_label: &'static str,
    pub filters: CaregiverFilters,
    pub total_caregivers: usize,
    pub caregivers: Vec<CaregiverWorkloadView>,
    pub summary: WorkloadSummary,
    pub insights: Vec<WorkloadInsight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heatmap: Option<Vec<HeatmapRow>>,
}
