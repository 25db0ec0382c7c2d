use crate::cli::ServeArgs;
use crate::infra::{load_roster, AppState};
use crate::routes::with_dashboard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use care_scheduler::config::AppConfig;
use care_scheduler::dashboard::DashboardService;
use care_scheduler::error::AppError;
use care_scheduler::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(roster) = args.roster.take() {
        config.dashboard.roster_path = Some(roster);
    }

    telemetry::init(&config.telemetry)?;

    let roster = load_roster(config.dashboard.roster_path.as_deref())?;
    let service = Arc::new(DashboardService::with_heatmap_days(
        roster,
        config.dashboard.heatmap_days,
    ));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_dashboard_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "caregiver dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
