//! CLI module for sitewatch

use clap::Parser;
use std::path::PathBuf;

/// sitewatch - periodic HTTP availability checker with a query API
#[derive(Parser, Debug)]
#[command(name = "sitewatch")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    SITEWATCH_CONFIG        Path to the TOML config (default: config.toml)
    SITEWATCH_LOG_LEVEL     Log filter (default: info, falls back to RUST_LOG)
"#)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = "config.toml", env = "SITEWATCH_CONFIG")]
    pub config_path: PathBuf,
}
