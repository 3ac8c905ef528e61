//! Server-side access to the marketplace REST API.

pub mod api;
pub mod config;
pub mod marketplace_client;
