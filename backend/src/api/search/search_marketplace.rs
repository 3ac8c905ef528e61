//! Search endpoint for result lists.

use common::{error::SearchBackendError, search_params::BackendSearchParams, search_result::SearchResponse};

use crate::marketplace_client::get_marketplace_client;

pub async fn search_marketplace(params: BackendSearchParams) -> Result<SearchResponse, SearchBackendError> {
    let client = get_marketplace_client().map_err(|e| {
        tracing::error!("search_marketplace: marketplace client unavailable: {e:#}");
        SearchBackendError::Unreachable(format!("{e:#}"))
    })?;
    client.search(&params).await
}
