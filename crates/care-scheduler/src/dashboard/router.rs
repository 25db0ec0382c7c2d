use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

use super::filters::{CaregiverFilters, DashboardView, Selection};
use super::heatmap::{HeatmapRow, MAX_WINDOW_DAYS};
use super::insights::WorkloadInsight;
use super::listings::{PatientFilters, PatientListEntry, VisitFilters, VisitListing};
use super::report::{CaregiverDetailView, CaregiverWorkloadView, DashboardSummary};
use super::roster::{CaregiverId, VisitStatus};
use super::service::DashboardService;
use crate::error::AppError;

/// Router exposing the read-only dashboard endpoints.
pub fn dashboard_router(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/v1/dashboard", get(dashboard_handler))
        .route("/api/v1/caregivers", get(caregivers_handler))
        .route("/api/v1/caregivers/:caregiver_id", get(caregiver_handler))
        .route("/api/v1/insights", get(insights_handler))
        .route("/api/v1/heatmap", get(heatmap_handler))
        .route("/api/v1/patients", get(patients_handler))
        .route("/api/v1/visits", get(visits_handler))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct CaregiverQuery {
    search: Option<String>,
    region: Option<String>,
    role: Option<String>,
    view: Option<String>,
    overbooked_only: Option<bool>,
    start: Option<String>,
    days: Option<u32>,
}

impl CaregiverQuery {
    fn filters(&self) -> Result<CaregiverFilters, AppError> {
        let view = match self.view.as_deref() {
            Some(raw) => DashboardView::parse(raw)
                .ok_or_else(|| AppError::InvalidQuery(format!("unknown view '{raw}'")))?,
            None => DashboardView::default(),
        };

        Ok(CaregiverFilters {
            search: self.search.clone().unwrap_or_default(),
            region: selection(self.region.as_deref()),
            role: selection(self.role.as_deref()),
            view,
            overbooked_only: self.overbooked_only.unwrap_or(false),
        })
    }

    fn start(&self) -> Result<Option<NaiveDate>, AppError> {
        self.start.as_deref().map(parse_query_date).transpose()
    }

    fn days(&self) -> Result<Option<u32>, AppError> {
        match self.days {
            Some(days) if days == 0 || days > MAX_WINDOW_DAYS => Err(AppError::InvalidQuery(
                format!("days must be between 1 and {MAX_WINDOW_DAYS}"),
            )),
            other => Ok(other),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PatientQuery {
    search: Option<String>,
    status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct VisitQuery {
    search: Option<String>,
    status: Option<String>,
    from: Option<String>,
    to: Option<String>,
}

impl VisitQuery {
    fn filters(&self) -> Result<VisitFilters, AppError> {
        let status = match self.status.as_deref() {
            None | Some(Selection::ALL) => None,
            Some(raw) => Some(VisitStatus::parse(raw).ok_or_else(|| {
                AppError::InvalidQuery(format!("unknown visit status '{raw}'"))
            })?),
        };

        Ok(VisitFilters {
            search: self.search.clone().unwrap_or_default(),
            status,
            from: self.from.as_deref().map(parse_query_date).transpose()?,
            to: self.to.as_deref().map(parse_query_date).transpose()?,
        })
    }
}

fn selection(raw: Option<&str>) -> Selection {
    raw.filter(|value| !value.trim().is_empty())
        .map(Selection::from)
        .unwrap_or_default()
}

fn parse_query_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|err| {
        AppError::InvalidQuery(format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
    })
}

pub(crate) async fn dashboard_handler(
    State(service): State<Arc<DashboardService>>,
    Query(query): Query<CaregiverQuery>,
) -> Result<Json<DashboardSummary>, AppError> {
    let filters = query.filters()?;
    let window = service.heatmap_window(query.start()?, query.days()?);
    Ok(Json(service.dashboard(filters, window)))
}

pub(crate) async fn caregivers_handler(
    State(service): State<Arc<DashboardService>>,
    Query(query): Query<CaregiverQuery>,
) -> Result<Json<Vec<CaregiverWorkloadView>>, AppError> {
    let filters = query.filters()?;
    let window = service.heatmap_window(None, None);
    Ok(Json(service.dashboard(filters, window).caregivers))
}

pub(crate) async fn caregiver_handler(
    State(service): State<Arc<DashboardService>>,
    Path(caregiver_id): Path<String>,
) -> Result<Json<CaregiverDetailView>, AppError> {
    let id = CaregiverId(caregiver_id);
    service
        .caregiver(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("caregiver '{id}'")))
}

pub(crate) async fn insights_handler(
    State(service): State<Arc<DashboardService>>,
) -> Json<Vec<WorkloadInsight>> {
    Json(service.insights())
}

pub(crate) async fn heatmap_handler(
    State(service): State<Arc<DashboardService>>,
    Query(query): Query<CaregiverQuery>,
) -> Result<Json<Vec<HeatmapRow>>, AppError> {
    let filters = query.filters()?;
    let window = service.heatmap_window(query.start()?, query.days()?);
    Ok(Json(service.heatmap(filters, &window)))
}

pub(crate) async fn patients_handler(
    State(service): State<Arc<DashboardService>>,
    Query(query): Query<PatientQuery>,
) -> Json<Vec<PatientListEntry>> {
    let filters = PatientFilters {
        search: query.search.unwrap_or_default(),
        status: selection(query.status.as_deref()),
    };
    Json(service.patients(&filters))
}

pub(crate) async fn visits_handler(
    State(service): State<Arc<DashboardService>>,
    Query(query): Query<VisitQuery>,
) -> Result<Json<VisitListing>, AppError> {
    let filters = query.filters()?;
    Ok(Json(service.visits(&filters)))
}
