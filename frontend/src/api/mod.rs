//! Client API calls.

pub mod marketplace_api;
