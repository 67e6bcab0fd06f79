//! Configuration
//!
//! Static configuration loaded once at startup from defaults, an optional
//! TOML file and `CRCLINK__*` environment variables.

mod structs;

pub use structs::*;
