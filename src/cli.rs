use clap::Parser;
use pakket_status::application::dto::OutputFormat;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_CACHE_DIR: &str = ".pakket-cache";

/// Render the build status table of a Pakket inventory server
#[derive(Parser, Debug)]
#[command(name = "pakket-status")]
#[command(version)]
#[command(
    about = "Render the build status table of a Pakket inventory server",
    long_about = None
)]
pub struct Args {
    /// Inventory server base URL [default: http://localhost:8080]
    #[arg(short = 'u', long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Status page URL whose query string seeds the filters
    /// (e.g. "/status?broken=1&s=moose")
    #[arg(short, long, value_name = "URL")]
    pub query: Option<String>,

    /// Search text matched against package ids ("::" matches "-")
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Only packages with a failed build
    #[arg(long)]
    pub broken: bool,

    /// Only packages with a newer release on CPAN
    #[arg(long)]
    pub outdated: bool,

    /// Only packages not tracked on CPAN
    #[arg(long)]
    pub noncpan: bool,

    /// Output format: html or markdown [default: html]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory holding the local inventory snapshot [default: .pakket-cache]
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Render from the local snapshot only, without contacting the server
    #[arg(long)]
    pub offline: bool,

    /// Keep the snapshot in memory only; nothing is read from or written to disk
    #[arg(long, conflicts_with = "cache_dir")]
    pub no_cache: bool,

    /// Read interaction commands from stdin before writing the output
    #[arg(short, long)]
    pub interactive: bool,

    /// Path to config file (default: auto-discover pakket-status.config.yml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Link package names to <URL>/<name>.yaml in a metadata repository
    #[arg(long, value_name = "URL")]
    pub source_link_base: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
