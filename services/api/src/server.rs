use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::onboarding_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use sara::config::AppConfig;
use sara::error::AppError;
use sara::telemetry::{self, LogSink};
use sara::workflows::onboarding::RiskEngine;
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

    telemetry::init(&config.telemetry, LogSink::Stdout)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(RiskEngine::new(config.evaluation.clone()));
    let app = onboarding_router(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        tpv_threshold = config.evaluation.transaction_volume_threshold,
        device_threshold = config.evaluation.device_count_threshold,
        "onboarding risk service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
