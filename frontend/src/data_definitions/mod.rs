//! Route state and client-side data definitions.

pub mod session_cache;
pub mod url_param;
