//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod error;
pub mod search_query;
pub mod search_params;
pub mod search_result;
pub mod query_classifier;
pub mod ai_response_parser;
pub mod filter_mapper;
pub mod search_flow;
pub mod result_card;
