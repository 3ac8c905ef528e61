//! Proxy for the chat completion endpoint used to enhance queries.

use common::error::SearchBackendError;

use crate::marketplace_client::get_marketplace_client;

pub async fn ai_chat(message: String) -> Result<String, SearchBackendError> {
    let client = get_marketplace_client().map_err(|e| {
        tracing::error!("ai_chat: marketplace client unavailable: {e:#}");
        SearchBackendError::Unreachable(format!("{e:#}"))
    })?;
    client.ai_chat(&message).await
}
