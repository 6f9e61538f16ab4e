use crate::identity::Identity;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use second_service_contracts::{SecondServiceClient, SecondServiceGrpcClient};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub identity: Identity,
    pub second: SecondServiceClient,
    pub second_grpc: SecondServiceGrpcClient,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/second", get(second))
        .route("/secondGrpc", get(second_grpc))
        .with_state(state)
}

async fn home(State(state): State<AppState>) -> String {
    info!("home status requested");
    state.identity.status_line()
}

async fn second(State(state): State<AppState>) -> Result<String, AppError> {
    let status = state.second.home_status().await?;
    info!("proxied second service status over REST");
    Ok(format!("Second status: {status}"))
}

async fn second_grpc(State(state): State<AppState>) -> Result<String, AppError> {
    let status = state.second_grpc.basic_data("gRPC").await?;
    info!("proxied second service status over gRPC");
    Ok(format!("Second GRPC status: {status}"))
}

/// Upstream client failures surface as 500 with the error chain as body.
struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", self.0)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
