use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::OutputFormat;
use crate::sources::xkcd::DEFAULT_BASE_URL;

#[derive(Parser, Debug, Clone)]
#[command(name = "xkcd", about = "Fetch xkcd comics as text or JSON")]
pub struct XkcdConfig {
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL, env = "XKCD_BASE_URL")]
    pub base_url: String,

    #[arg(long, global = true, default_value = "15", env = "XKCD_TIMEOUT")]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print a comic to stdout
    Get(GetArgs),
    /// Serve comics over HTTP
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GetArgs {
    /// `latest`, `random`, or a comic number such as 1234 or #1234
    #[arg(default_value = "latest")]
    pub comic: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Also download the comic image to this path
    #[arg(short, long)]
    pub save_image: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "3000", env = "XKCD_PORT")]
    pub port: u16,
}
