//! HTTP client for calcsrv

use anyhow::{Context, Result};
use calcsrv::dto::{BinaryOperationRequest, ConversionRequest};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde_json::{json, Value};

pub const DEFAULT_URL: &str = "http://127.0.0.1:8000";
const LOG_LEVEL_PATH: &str = "/api/admin/logs/level";

/// Status and JSON body of one call, success or error envelope alike
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct CalcClient {
    client: Client,
    base_url: String,
}

impl CalcClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn binary_operation(&self, request: &BinaryOperationRequest) -> Result<Reply> {
        self.post("/binary/operation", request).await
    }

    pub async fn convert(&self, request: &ConversionRequest) -> Result<Reply> {
        self.post("/convert", request).await
    }

    pub async fn get_log_level(&self) -> Result<Reply> {
        self.send(self.client.get(self.url(LOG_LEVEL_PATH))).await
    }

    #[allow(clippy::disallowed_methods)] // json! macro internally uses unwrap (safe for known valid JSON)
    pub async fn set_log_level(&self, level: &str) -> Result<Reply> {
        self.post(LOG_LEVEL_PATH, &json!({ "level": level })).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Reply> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Reply> {
        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to reach calcsrv at {}", self.base_url))?;

        let status = response.status().as_u16();
        let text = response.text().await?;
        // Errors raised before the handler (e.g. body limit) may not be JSON
        let body = serde_json::from_str(&text).unwrap_or_else(|_| json!({ "error": text }));
        Ok(Reply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_success_range() {
        let ok = Reply {
            status: 200,
            body: Value::Null,
        };
        let bad = Reply {
            status: 422,
            body: Value::Null,
        };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = CalcClient::new("http://localhost:8000/");
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
