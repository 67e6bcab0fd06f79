//! crclink - a minimal URL shortener
//!
//! A short id is the CRC32 of the target URL in 8 hex digits. The mapping is
//! stored in a single `urls` table and served by two endpoints: a redirect
//! endpoint on `/{id}` and a create form on `/api/v1/urls`.
//!
//! # Architecture
//! - `utils`: id hashing and request path validation
//! - `storage`: the `UrlStore` trait with SeaORM and in-memory backends
//! - `api`: HTTP handlers and route builders
//! - `config`: static configuration
//! - `runtime`: startup context and server mode
//! - `system`: logging

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod storage;
pub mod system;
pub mod utils;
