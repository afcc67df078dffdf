pub mod endpoints;
mod error;
pub mod repositories;

pub use crate::error::TalentApiError;
use repositories::*;
use tower_api_client::{Client as ApiClient, Request as ApiRequest};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

pub struct Client {
    inner: ApiClient,
}

impl Client {
    /// The talents endpoint is unauthenticated, so no credentials are attached.
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: ApiClient::new(base_url),
        }
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, TalentApiError>
    where
        R: ApiRequest,
    {
        self.inner.send(request).await.map_err(From::from)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

pub struct Request;

impl Request {
    pub fn talents() -> TalentRepository {
        TalentRepository::new()
    }
}
