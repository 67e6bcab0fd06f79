//! Mode routing

pub mod server;

pub use server::{configure_routes, run_server};
