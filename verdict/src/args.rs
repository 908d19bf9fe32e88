use std::path::PathBuf;

use clap::Parser;

/// Verdict demo API
#[derive(Debug, Parser)]
#[command(name = "verdict", about = "Result-to-HTTP mapping demo API")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "verdict.toml", env = "VERDICT_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "VERDICT_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
