use second_service_api::{BasicRequest, DataServiceClient};
use tonic::transport::{Channel, Endpoint};

/// Errors from the gRPC channel to SecondService.
#[derive(Debug, thiserror::Error)]
pub enum GrpcClientError {
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, #[source] tonic::transport::Error),
    #[error("GetBasicData call failed: {0}")]
    Call(#[from] tonic::Status),
}

/// gRPC client for SecondService's `DataService`.
///
/// The channel is created lazily: construction only validates the address,
/// and the connection is established on the first call. Certificate
/// validation and other transport concerns stay with tonic's defaults.
#[derive(Debug, Clone)]
pub struct SecondServiceGrpcClient {
    client: DataServiceClient<Channel>,
}

impl SecondServiceGrpcClient {
    pub fn new(addr: &str) -> Result<Self, GrpcClientError> {
        let endpoint = Endpoint::new(addr.to_string())
            .map_err(|err| GrpcClientError::InvalidUrl(addr.to_string(), err))?;

        Ok(Self::from_channel(endpoint.connect_lazy()))
    }

    /// Wraps an existing channel, letting tests inject an in-process server.
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            client: DataServiceClient::new(channel),
        }
    }

    /// Fetches the status line for the given call-state tag.
    pub async fn basic_data(&self, state: &str) -> Result<String, GrpcClientError> {
        let request = BasicRequest {
            state: state.to_string(),
        };

        // Generated clients take `&mut self`; they are cheap to clone and
        // share the underlying channel.
        let response = self.client.clone().get_basic_data(request).await?;

        Ok(response.into_inner().status_text)
    }
}
