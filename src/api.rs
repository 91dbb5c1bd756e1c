use std::sync::Arc;

use anyhow::{Error, Result};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    clients::health::HealthChecker,
    config::Config,
    dispatcher::Dispatcher,
    errors::DispatchError,
    models::{
        health::HealthStatus, message::NotificationRequest, receipt::DeliveryReceipt,
        response::ApiResponse,
    },
};

pub struct AppState {
    dispatcher: Dispatcher,
    health_checker: HealthChecker,
}

pub fn router(dispatcher: Dispatcher) -> Router {
    let state = Arc::new(AppState {
        health_checker: HealthChecker::new(dispatcher.clone()),
        dispatcher,
    });

    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/notifications", post(send_notification))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(config: Config, dispatcher: Dispatcher) -> Result<(), Error> {
    let app = router(dispatcher);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Notification API server started");

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let health = state.health_checker.check_all();

    let status_code = match health.status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (status_code, Json(health))
}

async fn send_notification(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NotificationRequest>,
) -> impl IntoResponse {
    match state.dispatcher.dispatch_request(&request).await {
        Ok(receipt) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                receipt,
                "Notification sent".to_string(),
            )),
        ),
        Err(e) => {
            let status_code = match e {
                DispatchError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                DispatchError::UnsupportedCombination(_) => StatusCode::NOT_IMPLEMENTED,
                DispatchError::Transport(_) => StatusCode::BAD_GATEWAY,
            };

            (
                status_code,
                Json(ApiResponse::<DeliveryReceipt>::error(
                    e.to_string(),
                    "Notification not sent".to_string(),
                )),
            )
        }
    }
}
