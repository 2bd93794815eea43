//! Request-scoped middleware and extractors.

pub mod query;
pub mod request_id;
