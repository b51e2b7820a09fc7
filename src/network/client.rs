//! HTTP client for making requests to the places provider

use crate::config::OutgoingSettings;
use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use std::time::Duration;

/// Buffered HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response URL after redirects
    pub url: String,
    /// Raw response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Check if the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Status and final location of a request whose body was not read
#[derive(Debug, Clone)]
pub struct ResolvedLocation {
    pub status: u16,
    pub url: String,
}

/// HTTP client wrapper with a fixed per-request timeout
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let timeout = Duration::from_secs_f64(settings.request_timeout);
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .user_agent(settings.user_agent.clone())
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, timeout })
    }

    /// GET with query parameters, buffering the body
    pub async fn get(&self, url: &str, params: &[(&str, &str)]) -> reqwest::Result<HttpResponse> {
        let request = self.client.get(url).query(params);
        self.execute(request).await
    }

    /// POST a JSON body with extra headers, buffering the response body
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: &T,
    ) -> reqwest::Result<HttpResponse> {
        let mut request = self.client.post(url).json(body);
        for (key, value) in headers {
            request = request.header(*key, *value);
        }
        self.execute(request).await
    }

    /// GET following redirects, keeping only the status and final URL
    pub async fn resolve(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> reqwest::Result<ResolvedLocation> {
        let response = self.client.get(url).query(params).send().await?;
        Ok(ResolvedLocation {
            status: response.status().as_u16(),
            url: response.url().to_string(),
        })
    }

    /// Configured per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn execute(&self, request: RequestBuilder) -> reqwest::Result<HttpResponse> {
        let response = request.send().await?;
        Self::parse_response(response).await
    }

    async fn parse_response(response: Response) -> reqwest::Result<HttpResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, url, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
        assert_eq!(client.unwrap().timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_success_range() {
        let mut response = HttpResponse {
            status: 204,
            url: String::new(),
            body: vec![],
        };
        assert!(response.is_success());
        response.status = 302;
        assert!(!response.is_success());
    }
}
