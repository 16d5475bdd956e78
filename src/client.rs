use std::fmt;

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::models::OrderRequest;

/// Order intake endpoint of the target service. Not configurable.
pub const ORDER_ENDPOINT: &str = "http://localhost:3000/order";

#[derive(Debug)]
pub enum ClientError {
    Encode(serde_json::Error),
    Transport(reqwest::Error),
    Decode(serde_json::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Encode(e) => write!(f, "Failed to encode order: {}", e),
            ClientError::Transport(e) => write!(f, "Order request failed: {}", e),
            ClientError::Decode(e) => write!(f, "Response is not valid JSON: {}", e),
        }
    }
}

impl std::error::Error for ClientError {}

pub struct OrderClient {
    http: reqwest::Client,
    endpoint: String,
}

impl OrderClient {
    pub fn new() -> Self {
        Self::with_endpoint(ORDER_ENDPOINT)
    }

    /// Point the client at a non-default intake URL (tests run one on an
    /// ephemeral port).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        OrderClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit one order: print the body, POST it, print and return the decoded
    /// reply.
    ///
    /// The printed body is the exact string that goes on the wire. The response
    /// status is not inspected; whatever the service answers gets decoded as
    /// JSON or the call fails.
    pub async fn send_order(&self, order: &OrderRequest) -> Result<Value, ClientError> {
        let body = serde_json::to_string(order).map_err(ClientError::Encode)?;
        println!("{}", body);

        let resp = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let text = resp.text().await.map_err(ClientError::Transport)?;
        let reply: Value = serde_json::from_str(&text).map_err(ClientError::Decode)?;
        println!("{}", reply);

        Ok(reply)
    }
}

impl Default for OrderClient {
    fn default() -> Self {
        Self::new()
    }
}
