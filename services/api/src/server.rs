use crate::cli::ServeArgs;
use crate::infra::{AppState, ConfiguredRelay};
use crate::routes::with_pricing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use portfolio_pricing::config::AppConfig;
use portfolio_pricing::contact::ContactService;
use portfolio_pricing::error::AppError;
use portfolio_pricing::telemetry;
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

    let relay = ConfiguredRelay::from_config(&config.contact)?;
    info!(relay = relay.describe(), "contact relay configured");
    let contact_service = Arc::new(ContactService::new(Arc::new(relay)));

    let app = with_pricing_routes(contact_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "portfolio pricing service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
