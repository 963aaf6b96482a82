use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_ride_along_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use depot_ops::config::AppConfig;
use depot_ops::error::AppError;
use depot_ops::telemetry;
use depot_ops::workflows::ride_along::{JsonFileStore, RideAlongService};
use std::sync::atomic::Ordering;
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

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = JsonFileStore::new(&config.archive.path);
    let service = Arc::new(RideAlongService::new(
        store,
        config.evaluation.catalog,
        config.archive.history_limit,
    ));

    let app = with_ride_along_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        catalog = config.evaluation.catalog.as_str(),
        archive = %config.archive.path.display(),
        "ride-along service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
