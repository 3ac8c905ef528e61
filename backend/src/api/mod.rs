//! Server-side entry points called by the frontend server functions.

pub mod ai_chat;
pub mod search;
