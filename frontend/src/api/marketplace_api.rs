//! Client API calls for the marketplace endpoints.

use common::{
    error::SearchBackendError,
    search_flow::MarketplaceBackend,
    search_params::BackendSearchParams,
    search_result::SearchResponse,
};
use dioxus::prelude::*;

const UNREACHABLE_STATUS: u16 = 503;
const BAD_GATEWAY_STATUS: u16 = 502;

/// Carries the error itself in `details`; the status code is only for HTTP tooling.
#[cfg_attr(not(feature = "server"), allow(dead_code))]
fn to_server_fn_error(e: SearchBackendError) -> ServerFnError {
    let code = match &e {
        SearchBackendError::Unreachable(_) => UNREACHABLE_STATUS,
        SearchBackendError::Status { code, .. } => *code,
        SearchBackendError::InvalidResponse(_) => BAD_GATEWAY_STATUS,
    };
    let details = serde_json::to_value(&e).ok();
    ServerFnError::ServerError { message: e.to_string(), code, details }
}

/// Undoes `to_server_fn_error`; failures before reaching our server count as unreachable.
pub fn from_server_fn_error(e: ServerFnError) -> SearchBackendError {
    match e {
        ServerFnError::ServerError { message, code, details } => {
            if let Some(error) = details.and_then(|details| serde_json::from_value(details).ok()) {
                return error;
            }
            match code {
                UNREACHABLE_STATUS => SearchBackendError::Unreachable(message),
                BAD_GATEWAY_STATUS => SearchBackendError::InvalidResponse(message),
                code => SearchBackendError::Status { code, message },
            }
        }
        other => SearchBackendError::Unreachable(other.to_string()),
    }
}

#[server]
pub async fn ai_chat(message: String) -> Result<String, ServerFnError> {
    backend::api::ai_chat::ai_chat(message).await.map_err(to_server_fn_error)
}

#[server]
pub async fn search_marketplace(params: BackendSearchParams) -> Result<SearchResponse, ServerFnError> {
    backend::api::search::search_marketplace(params).await.map_err(to_server_fn_error)
}

/// Runs the search pipeline from the browser through the server functions above.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnBackend;

impl MarketplaceBackend for ServerFnBackend {
    async fn ai_chat(&self, message: String) -> Result<String, SearchBackendError> {
        ai_chat(message).await.map_err(from_server_fn_error)
    }

    async fn search(&self, params: &BackendSearchParams) -> Result<SearchResponse, SearchBackendError> {
        search_marketplace(params.clone()).await.map_err(from_server_fn_error)
    }
}
