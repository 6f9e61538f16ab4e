use http_shared::{ClientBase, ClientError};
use url::Url;

/// REST client for SecondService.
#[derive(Debug, Clone)]
pub struct SecondServiceClient {
    base: ClientBase,
}

impl SecondServiceClient {
    pub fn new(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            base: ClientBase::new(http, base_url),
        }
    }

    /// Fetches the plain-text status line served at the service root.
    pub async fn home_status(&self) -> Result<String, ClientError> {
        self.base.get_text("").await
    }
}
