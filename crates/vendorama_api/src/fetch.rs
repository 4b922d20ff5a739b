use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CACHE_CONTROL;

use crate::decode::decode_page;
use crate::types::{FailureKind, FetchError, ParamPair, SearchPage};

/// Remote endpoint and transport limits for the search API.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Base search endpoint; the query builder's parameters are appended.
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.vendorama.example/search".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 3,
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

/// One paged fetch against the search endpoint.
///
/// Implementations never mutate session state; they return a decoded page or
/// a typed failure and nothing else.
#[async_trait::async_trait]
pub trait SearchApi: Send + Sync {
    async fn fetch_page(
        &self,
        params: &[ParamPair],
        bypass_cache: bool,
    ) -> Result<SearchPage, FetchError>;
}

/// The production implementation over one shared reqwest client.
pub struct ReqwestSearchApi {
    endpoint: reqwest::Url,
    client: reqwest::Client,
    max_bytes: u64,
}

impl ReqwestSearchApi {
    pub fn new(settings: ApiSettings) -> Result<Self, FetchError> {
        let endpoint = reqwest::Url::parse(&settings.endpoint)
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            endpoint,
            client,
            max_bytes: settings.max_bytes,
        })
    }
}

#[async_trait::async_trait]
impl SearchApi for ReqwestSearchApi {
    async fn fetch_page(
        &self,
        params: &[ParamPair],
        bypass_cache: bool,
    ) -> Result<SearchPage, FetchError> {
        let mut request = self.client.get(self.endpoint.clone()).query(params);
        if bypass_cache {
            request = request.header(CACHE_CONTROL, "no-cache");
        }

        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.max_bytes {
                return Err(FetchError::new(FailureKind::TooLarge, "response too large"));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            if bytes.len() as u64 + chunk.len() as u64 > self.max_bytes {
                return Err(FetchError::new(FailureKind::TooLarge, "response too large"));
            }
            bytes.extend_from_slice(&chunk);
        }

        decode_page(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
