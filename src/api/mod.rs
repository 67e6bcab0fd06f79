//! HTTP surface: the redirect endpoint and the create form endpoint.

pub mod constants;
pub mod services;
