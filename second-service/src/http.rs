use crate::status::StatusService;
use axum::extract::State;
use axum::routing::get;
use axum::Router;
use tracing::info;

pub fn app(status: StatusService) -> Router {
    Router::new().route("/", get(home)).with_state(status)
}

async fn home(State(status): State<StatusService>) -> String {
    info!("home status requested");
    status.status("http default")
}
