use crate::infra::{load_roster, parse_date};
use care_scheduler::dashboard::heatmap::HeatmapRow;
use care_scheduler::dashboard::report::CaregiverDetailView;
use care_scheduler::dashboard::{
    CaregiverFilters, CaregiverId, DashboardService, DashboardSummary, DashboardView,
    PatientFilters, Roster, Selection, VisitFilters, VisitListing, VisitStatus, WorkloadInsight,
};
use care_scheduler::config::DashboardConfig;
use care_scheduler::dashboard::heatmap::MAX_WINDOW_DAYS;
use care_scheduler::error::AppError;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct RosterArgs {
    /// Roster file (JSON, or caregiver CSV). Defaults to CARE_ROSTER_PATH, then the
    /// built-in demo roster.
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

impl RosterArgs {
    fn service(&self, config: &DashboardConfig) -> Result<DashboardService, AppError> {
        let path = self.roster.as_deref().or(config.roster_path.as_deref());
        let roster = load_roster(path)?;
        Ok(DashboardService::with_heatmap_days(roster, config.heatmap_days))
    }
}

#[derive(Args, Debug)]
pub(crate) struct FilterArgs {
    /// Case-insensitive text matched against name, role, specialty, and patients
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Exact region, or "all"
    #[arg(long, default_value = Selection::ALL)]
    pub(crate) region: String,
    /// Role substring (case-sensitive), or "all"
    #[arg(long, default_value = Selection::ALL)]
    pub(crate) role: String,
    /// Dashboard view: list, workload, or heatmap
    #[arg(long, value_parser = parse_view, default_value = "list")]
    pub(crate) view: DashboardView,
    /// Only keep overbooked caregivers (heatmap view)
    #[arg(long)]
    pub(crate) overbooked_only: bool,
}

impl FilterArgs {
    pub(crate) fn to_filters(&self) -> CaregiverFilters {
        CaregiverFilters {
            search: self.search.clone(),
            region: Selection::from(self.region.as_str()),
            role: Selection::from(self.role.as_str()),
            view: self.view,
            overbooked_only: self.overbooked_only,
        }
    }
}

fn parse_view(raw: &str) -> Result<DashboardView, String> {
    DashboardView::parse(raw)
        .ok_or_else(|| format!("unknown view '{raw}' (expected list, workload, or heatmap)"))
}

fn parse_visit_status(raw: &str) -> Result<VisitStatus, String> {
    VisitStatus::parse(raw).ok_or_else(|| {
        format!("unknown visit status '{raw}' (expected scheduled, completed, or cancelled)")
    })
}

#[derive(Args, Debug)]
pub(crate) struct DashboardArgs {
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
    #[command(flatten)]
    pub(crate) filters: FilterArgs,
    /// First heatmap day (YYYY-MM-DD); defaults to the first logged day
    #[arg(long, value_parser = parse_date)]
    pub(crate) start: Option<NaiveDate>,
    /// Heatmap days to include; defaults to CARE_HEATMAP_DAYS
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_DAYS)))]
    pub(crate) days: Option<u32>,
}

#[derive(Args, Debug)]
pub(crate) struct CaregiverArgs {
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
    /// Caregiver id
    pub(crate) id: String,
}

#[derive(Args, Debug)]
pub(crate) struct HeatmapArgs {
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
    #[command(flatten)]
    pub(crate) filters: FilterArgs,
    /// First day of the grid (YYYY-MM-DD); defaults to the first logged day
    #[arg(long, value_parser = parse_date)]
    pub(crate) start: Option<NaiveDate>,
    /// Number of days to show; defaults to CARE_HEATMAP_DAYS
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_WINDOW_DAYS)))]
    pub(crate) days: Option<u32>,
}

#[derive(Args, Debug)]
pub(crate) struct PatientArgs {
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
    /// Case-insensitive text matched against patient name and care plan
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Exact patient status, or "all"
    #[arg(long, default_value = Selection::ALL)]
    pub(crate) status: String,
}

#[derive(Args, Debug)]
pub(crate) struct VisitArgs {
    #[command(flatten)]
    pub(crate) roster: RosterArgs,
    /// Case-insensitive text matched against patient and caregiver name
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Only visits with this status
    #[arg(long, value_parser = parse_visit_status)]
    pub(crate) status: Option<VisitStatus>,
    /// Earliest visit date (YYYY-MM-DD, inclusive)
    #[arg(long, value_parser = parse_date)]
    pub(crate) from: Option<NaiveDate>,
    /// Latest visit date (YYYY-MM-DD, inclusive)
    #[arg(long, value_parser = parse_date)]
    pub(crate) to: Option<NaiveDate>,
}

pub(crate) fn run_dashboard(args: DashboardArgs, config: &DashboardConfig) -> Result<(), AppError> {
    let service = args.roster.service(config)?;
    let window = service.heatmap_window(args.start, args.days);
    let summary = service.dashboard(args.filters.to_filters(), window);
    render_dashboard(&summary);
    Ok(())
}

pub(crate) fn run_caregiver(args: CaregiverArgs, config: &DashboardConfig) -> Result<(), AppError> {
    let service = args.roster.service(config)?;
    match service.caregiver(&CaregiverId(args.id.clone())) {
        Some(detail) => render_caregiver(&detail),
        None => println!("Caregiver '{}' not found", args.id),
    }
    Ok(())
}

pub(crate) fn run_insights(args: RosterArgs, config: &DashboardConfig) -> Result<(), AppError> {
    let service = args.service(config)?;
    render_insights(&service.insights());
    Ok(())
}

pub(crate) fn run_heatmap(args: HeatmapArgs, config: &DashboardConfig) -> Result<(), AppError> {
    let service = args.roster.service(config)?;
    let window = service.heatmap_window(args.start, args.days);
    let rows = service.heatmap(args.filters.to_filters(), &window);
    render_heatmap(&rows);
    Ok(())
}

pub(crate) fn run_patients(args: PatientArgs, config: &DashboardConfig) -> Result<(), AppError> {
    let service = args.roster.service(config)?;
    let filters = PatientFilters {
        search: args.search,
        status: Selection::from(args.status),
    };
    let patients = service.patients(&filters);

    if patients.is_empty() {
        println!("Patients: none");
        return Ok(());
    }

    println!("Patients");
    for patient in &patients {
        let next_visit = patient
            .next_visit
            .map(|at| format!(", next visit {}", at.format("%Y-%m-%d %H:%M")))
            .unwrap_or_default();
        println!(
            "- {} ({}), {} | {} | caregiver {}{}",
            patient.name, patient.age, patient.status, patient.care_plan, patient.caregiver_name,
            next_visit
        );
    }
    Ok(())
}

pub(crate) fn run_visits(args: VisitArgs, config: &DashboardConfig) -> Result<(), AppError> {
    let service = args.roster.service(config)?;
    let filters = VisitFilters {
        search: args.search,
        status: args.status,
        from: args.from,
        to: args.to,
    };
    render_visits(&service.visits(&filters));
    Ok(())
}

pub(crate) fn run_demo(config: &DashboardConfig) -> Result<(), AppError> {
    let service = DashboardService::with_heatmap_days(Roster::demo(), config.heatmap_days);
    let window = service.heatmap_window(None, None);

    println!("Caregiver dashboard demo");

    let workload = CaregiverFilters {
        view: DashboardView::Workload,
        ..CaregiverFilters::default()
    };
    render_dashboard(&service.dashboard(workload, window));

    println!();
    let overbooked = CaregiverFilters {
        view: DashboardView::Heatmap,
        overbooked_only: true,
        ..CaregiverFilters::default()
    };
    render_heatmap(&service.heatmap(overbooked, &window));

    if let Some(first) = service.roster().caregivers.first() {
        println!();
        if let Some(detail) = service.caregiver(&first.id) {
            render_caregiver(&detail);
        }
    }

    println!();
    render_visits(&service.visits(&VisitFilters::default()));
    Ok(())
}

fn render_dashboard(summary: &DashboardSummary) {
    println!(
        "{} view: {} of {} caregivers",
        summary.view_label,
        summary.caregivers.len(),
        summary.total_caregivers
    );

    for caregiver in &summary.caregivers {
        println!(
            "- {} ({}, {}): {:.0}/{:.0} h, {:.0}% [{}]",
            caregiver.name,
            caregiver.role,
            caregiver.region,
            caregiver.assigned_hours,
            caregiver.max_hours,
            caregiver.load_percent,
            caregiver.workload_label
        );
    }

    println!(
        "\nTeam load: {:.0}/{:.0} h ({:.0}%)",
        summary.summary.total_assigned_hours,
        summary.summary.total_capacity_hours,
        summary.summary.team_load_percent
    );
    for entry in summary
        .summary
        .status_counts
        .iter()
        .filter(|entry| entry.count > 0)
    {
        println!("- {}: {}", entry.status_label, entry.count);
    }

    println!();
    render_insights(&summary.insights);

    if let Some(rows) = &summary.heatmap {
        println!();
        render_heatmap(rows);
    }
}

fn render_insights(insights: &[WorkloadInsight]) {
    println!("Insights");
    for insight in insights {
        println!("- [{}] {}", insight.level_label, insight.message);
    }
}

fn render_heatmap(rows: &[HeatmapRow]) {
    if rows.is_empty() {
        println!("Heatmap: no caregivers match");
        return;
    }

    let dates: Vec<String> = rows[0]
        .cells
        .iter()
        .map(|cell| cell.date.format("%m-%d").to_string())
        .collect();
    println!("Heatmap {:<20} {}", "", dates.join(" "));

    for row in rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| format!("{:>5.1}", cell.hours))
            .collect();
        println!(
            "- {:<26} {} | {:.0}/{:.0} h ({:.0}%){}",
            row.caregiver_name,
            cells.join(" "),
            row.total_hours,
            row.max_hours,
            row.utilization_percent,
            if row.overbooked { " overbooked" } else { "" }
        );
    }
}

fn render_caregiver(detail: &CaregiverDetailView) {
    let workload = &detail.workload;
    println!("{} ({})", workload.name, workload.id);
    println!(
        "{} | {} | {} | status {}",
        workload.role, workload.specialty, workload.region, workload.status
    );
    println!(
        "Workload: {:.0}/{:.0} h, {:.0}% [{}]; logged {:.0} h ({:.0}%){}",
        workload.assigned_hours,
        workload.max_hours,
        workload.load_percent,
        workload.workload_label,
        detail.logged_hours,
        detail.logged_percent,
        if detail.overbooked { ", overbooked" } else { "" }
    );

    if detail.patients_list.is_empty() {
        println!("Patients: none");
    } else {
        println!("Patients");
        for patient in &detail.patients_list {
            println!("- {} ({}): {}", patient.name, patient.age, patient.care_plan);
        }
    }

    if detail.scheduled_visits.is_empty() {
        println!("Visits: none");
    } else {
        println!("Visits");
        for visit in &detail.scheduled_visits {
            println!(
                "- {} {} ({} min) {}",
                visit.scheduled_at.format("%Y-%m-%d %H:%M"),
                visit.patient_name,
                visit.duration,
                visit.status_label
            );
        }
    }
}

fn render_visits(listing: &VisitListing) {
    let counts: Vec<String> = listing
        .status_counts
        .iter()
        .map(|entry| format!("{} {}", entry.count, entry.status_label.to_lowercase()))
        .collect();
    println!("Visits ({})", counts.join(", "));

    for visit in &listing.visits {
        println!(
            "- {} | {} with {} | {} min | {}",
            visit.scheduled_at.format("%Y-%m-%d %H:%M"),
            visit.patient_name,
            visit.caregiver_name,
            visit.duration,
            visit.status_label
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use care_scheduler::dashboard::heatmap::DEFAULT_WINDOW_DAYS;

    fn dashboard_config(heatmap_days: u32) -> DashboardConfig {
        DashboardConfig {
            roster_path: None,
            heatmap_days,
        }
    }

    #[test]
    fn demo_runs_against_built_in_roster() {
        run_demo(&dashboard_config(DEFAULT_WINDOW_DAYS)).expect("demo succeeds");
    }

    #[test]
    fn missing_caregiver_is_reported_not_raised() {
        let args = CaregiverArgs {
            roster: RosterArgs::default(),
            id: "cg-999".to_string(),
        };
        run_caregiver(args, &dashboard_config(DEFAULT_WINDOW_DAYS))
            .expect("missing caregiver is not an error");
    }

    #[test]
    fn report_service_uses_configured_heatmap_days() {
        let service = RosterArgs::default()
            .service(&dashboard_config(14))
            .expect("demo roster");
        let window = service.heatmap_window(None, None);
        assert_eq!(window.days, 14);
        assert_eq!(service.heatmap(CaregiverFilters::default(), &window)[0].cells.len(), 14);
    }

    #[test]
    fn configured_roster_path_is_used_without_a_flag() {
        let config = DashboardConfig {
            roster_path: Some(PathBuf::from("./no-such-roster.json")),
            heatmap_days: DEFAULT_WINDOW_DAYS,
        };
        let err = RosterArgs::default()
            .service(&config)
            .expect_err("configured path is read");
        assert!(matches!(err, AppError::Roster(_)));
    }

    #[test]
    fn filter_args_map_all_sentinel() {
        let args = FilterArgs {
            search: String::new(),
            region: "all".to_string(),
            role: "Nurse".to_string(),
            view: DashboardView::List,
            overbooked_only: false,
        };
        let filters = args.to_filters();
        assert_eq!(filters.region, Selection::All);
        assert_eq!(filters.role, Selection::only("Nurse"));
    }
}
