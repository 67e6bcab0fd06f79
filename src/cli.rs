//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// crclink - CRC32-based URL shortener
#[derive(Parser, Debug)]
#[command(name = "crclink")]
#[command(version)]
#[command(about = "A minimal CRC32-based URL shortener", long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file (default: ./config.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigAction {
    /// Print a sample configuration, or write it to a file
    Generate {
        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<String>,
    },
}
