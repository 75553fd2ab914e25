//! HTTP transport
//!
//! The seam between the gateway and the network. Production code uses
//! [`ReqwestTransport`]; tests plug in scripted transports.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::TransportError;

// == Api Response ==
/// Status and, for successful responses, the decoded JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body: Some(body),
        }
    }

    pub fn status(status: u16) -> Self {
        Self { status, body: None }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// == Transport Trait ==
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues one GET and decodes a successful body as JSON.
    async fn get_json(&self, url: &str) -> Result<ApiResponse, TransportError>;

    /// Issues one HEAD and returns the status code.
    async fn head(&self, url: &str) -> Result<u16, TransportError>;
}

// == Reqwest Transport ==
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::new(client))
    }
}

fn request_error(url: &str, err: reqwest::Error) -> TransportError {
    TransportError::Request {
        url: url.to_string(),
        message: err.to_string(),
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_json(&self, url: &str) -> Result<ApiResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| request_error(url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Ok(ApiResponse::status(status.as_u16()));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|err| TransportError::InvalidBody {
                url: url.to_string(),
                message: err.to_string(),
            })?;

        Ok(ApiResponse {
            status: status.as_u16(),
            body: Some(body),
        })
    }

    async fn head(&self, url: &str) -> Result<u16, TransportError> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|err| request_error(url, err))?;
        Ok(response.status().as_u16())
    }
}
