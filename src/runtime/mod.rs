//! Runtime module
//!
//! Application lifecycle and execution modes:
//! - `lifetime`: startup context and shutdown handling
//! - `modes`: the HTTP server mode

pub mod lifetime;
pub mod modes;
