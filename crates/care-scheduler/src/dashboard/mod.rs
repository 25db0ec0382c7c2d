//! Workload classification, filtering, and insight generation for the
//! caregiver scheduling dashboard.

pub mod filters;
pub mod heatmap;
pub mod import;
pub mod insights;
pub mod listings;
pub mod report;
pub mod roster;
pub mod router;
pub mod service;
pub mod workload;

pub use filters::{CaregiverFilters, DashboardView, Selection};
pub use heatmap::{build_heatmap, HeatmapRow, HeatmapWindow};
pub use import::{RosterFormat, RosterImportError, RosterImporter};
pub use insights::{generate_insights, InsightLevel, WorkloadInsight};
pub use listings::{PatientFilters, VisitFilters, VisitListing};
pub use report::{caregiver_detail, DashboardReport, DashboardSummary};
pub use roster::{Caregiver, CaregiverId, Patient, Roster, Visit, VisitStatus};
pub use router::dashboard_router;
pub use service::DashboardService;
pub use workload::{classify, sort_by_workload, WorkloadStatus, WorkloadSubject, WorkloadSummary};
