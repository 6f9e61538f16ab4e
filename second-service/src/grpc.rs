use crate::status::StatusService;
use second_service_api::{BasicRequest, BasicResponse, DataService};
use tonic::{Request, Response, Status};
use tracing::info;

/// gRPC face of the status service.
#[derive(Debug)]
pub struct DataServiceGrpc {
    status: StatusService,
}

impl DataServiceGrpc {
    pub fn new(status: StatusService) -> Self {
        Self { status }
    }
}

#[tonic::async_trait]
impl DataService for DataServiceGrpc {
    async fn get_basic_data(
        &self,
        request: Request<BasicRequest>,
    ) -> Result<Response<BasicResponse>, Status> {
        let state = request.into_inner().state;
        info!(state = %state, "basic data requested");

        Ok(Response::new(BasicResponse {
            status_text: self.status.status(&state),
        }))
    }
}
