//! HTTP client for the marketplace REST API.

use common::{
    error::SearchBackendError,
    search_flow::MarketplaceBackend,
    search_params::BackendSearchParams,
    search_result::SearchResponse,
};
use reqwest::Url;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, info};

use crate::config::MarketplaceApiConfig;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    response: String,
}

#[derive(Debug, Clone)]
pub struct MarketplaceClient {
    http: reqwest::Client,
    base_url: Url,
}

pub fn get_marketplace_client() -> anyhow::Result<MarketplaceClient> {
    Ok(MarketplaceClient::new(MarketplaceApiConfig::from_env()?))
}

fn transport_error(e: reqwest::Error) -> SearchBackendError {
    if e.is_decode() {
        SearchBackendError::InvalidResponse(e.to_string())
    } else {
        SearchBackendError::Unreachable(e.to_string())
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, SearchBackendError> {
    let status = response.status();
    let response_txt = response.text().await.map_err(transport_error)?;
    if !status.is_success() {
        return Err(SearchBackendError::Status { code: status.as_u16(), message: response_txt });
    }
    debug!("marketplace response: status = {}, len = {}", status, response_txt.len());
    serde_json::from_str(&response_txt).map_err(|e| SearchBackendError::InvalidResponse(e.to_string()))
}

impl MarketplaceClient {
    pub fn new(config: MarketplaceApiConfig) -> Self {
        Self { http: reqwest::Client::new(), base_url: config.base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, SearchBackendError> {
        self.base_url.join(path).map_err(|e| SearchBackendError::Unreachable(format!("bad endpoint {path}: {e}")))
    }

    /// `POST /ai/chat`; returns the model's text reply.
    pub async fn ai_chat(&self, message: &str) -> Result<String, SearchBackendError> {
        let url = self.endpoint("ai/chat")?;
        let t0 = std::time::Instant::now();
        let response = self.http.post(url).json(&ChatRequest { message }).send().await.map_err(transport_error)?;
        let reply: ChatReply = read_json(response).await?;
        info!("ai chat answered in {}ms", t0.elapsed().as_millis());
        Ok(reply.response)
    }

    /// `GET /search/` with the params as query string.
    pub async fn search(&self, params: &BackendSearchParams) -> Result<SearchResponse, SearchBackendError> {
        let url = self.endpoint("search/")?;
        let t0 = std::time::Instant::now();
        let response = self
            .http
            .get(url)
            .query(&params.to_query_pairs())
            .send()
            .await
            .map_err(transport_error)?;
        let response: SearchResponse = read_json(response).await?;
        info!("search {:?} returned {} results in {}ms", params.q, response.results.len(), t0.elapsed().as_millis());
        Ok(response)
    }
}

impl MarketplaceBackend for MarketplaceClient {
    async fn ai_chat(&self, message: String) -> Result<String, SearchBackendError> {
        MarketplaceClient::ai_chat(self, &message).await
    }

    async fn search(&self, params: &BackendSearchParams) -> Result<SearchResponse, SearchBackendError> {
        MarketplaceClient::search(self, params).await
    }
}
