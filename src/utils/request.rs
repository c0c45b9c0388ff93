use reqwest::{Client, Method, StatusCode, header::HeaderMap};
use std::time::Duration;

use crate::error::Error;

/// A hung server call must not block a challenge attempt indefinitely.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Status line and body text of one API response.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

pub trait DnsHttpClient: Send + Sync {
    fn request(
        &self,
        method: Method,
        url: String,
        headers: HeaderMap,
        body: Option<String>,
    ) -> impl Future<Output = Result<HttpResponse, Error>> + Send;
}

pub struct DefaultDnsClient {
    inner: Client,
}

impl DefaultDnsClient {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            inner: Client::builder()
                .timeout(timeout)
                .build()
                .expect("failed to build HTTP client"),
        }
    }
}

impl Default for DefaultDnsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DnsHttpClient for DefaultDnsClient {
    async fn request(
        &self,
        method: Method,
        url: String,
        headers: HeaderMap,
        body: Option<String>,
    ) -> Result<HttpResponse, Error> {
        let mut req = self.inner.request(method, url).headers(headers);
        if let Some(body) = body {
            req = req.body(body);
        }
        let response = req.send().await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
