use crate::demo::{
    run_caregiver, run_dashboard, run_demo, run_heatmap, run_insights, run_patients, run_visits,
    CaregiverArgs, DashboardArgs, HeatmapArgs, PatientArgs, RosterArgs, VisitArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use care_scheduler::config::{AppConfig, DashboardConfig};
use care_scheduler::error::AppError;
use care_scheduler::telemetry;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Caregiver Scheduling Dashboard",
    about = "Serve and inspect caregiver workload dashboards from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the filtered caregiver list for one dashboard view
    Dashboard(DashboardArgs),
    /// Show one caregiver's workload, patients, and visits
    Caregiver(CaregiverArgs),
    /// Print workload advisories for the active team
    Insights(RosterArgs),
    /// Print the daily utilization grid
    Heatmap(HeatmapArgs),
    /// List patients across all caregiver rosters
    Patients(PatientArgs),
    /// List visits with optional status and date filters
    Visits(VisitArgs),
    /// Walk through every view using the built-in demo roster
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Roster file (JSON, or caregiver CSV) to serve instead of CARE_ROSTER_PATH
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Dashboard(args) => run_dashboard(args, &report_config()?),
        Command::Caregiver(args) => run_caregiver(args, &report_config()?),
        Command::Insights(args) => run_insights(args, &report_config()?),
        Command::Heatmap(args) => run_heatmap(args, &report_config()?),
        Command::Patients(args) => run_patients(args, &report_config()?),
        Command::Visits(args) => run_visits(args, &report_config()?),
        Command::Demo => run_demo(&report_config()?),
    }
}

/// Environment config and logging for the one-shot report commands.
fn report_config() -> Result<DashboardConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config.dashboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use care_scheduler::dashboard::DashboardView;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["care-scheduler-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn dashboard_flags_parse_into_filters() {
        let cli = Cli::try_parse_from([
            "care-scheduler-api",
            "dashboard",
            "--view",
            "heatmap",
            "--region",
            "North",
            "--overbooked-only",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Dashboard(args)) => {
                let filters = args.filters.to_filters();
                assert_eq!(filters.view, DashboardView::Heatmap);
                assert_eq!(filters.region.value(), Some("North"));
                assert!(filters.role.value().is_none());
                assert!(filters.overbooked_only);
            }
            other => panic!("expected dashboard command, got {other:?}"),
        }
    }

    #[test]
    fn dashboard_days_share_the_heatmap_range() {
        let cli = Cli::try_parse_from(["care-scheduler-api", "dashboard", "--days", "14"])
            .expect("parses");
        match cli.command {
            Some(Command::Dashboard(args)) => assert_eq!(args.days, Some(14)),
            other => panic!("expected dashboard command, got {other:?}"),
        }

        for days in ["0", "32"] {
            assert!(Cli::try_parse_from(["care-scheduler-api", "dashboard", "--days", days]).is_err());
            assert!(Cli::try_parse_from(["care-scheduler-api", "heatmap", "--days", days]).is_err());
        }
    }

    #[test]
    fn unknown_view_is_rejected() {
        assert!(Cli::try_parse_from(["care-scheduler-api", "dashboard", "--view", "timeline"]).is_err());
    }
}
