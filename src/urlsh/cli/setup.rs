use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "1.3.0" for releases, "1.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "urlsh", bin_name = "urlsh", version = get_version())]
#[command(about = "Local command-line URL shortener", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Data directory holding urls.json and config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Do not fetch page titles when shortening
    #[arg(long, global = true)]
    pub no_title: bool,

    /// Derive new codes from a hash of the URL instead of at random
    #[arg(long, global = true)]
    pub hash: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shorten a URL, optionally with a custom code
    #[command(visible_alias = "s")]
    Shorten {
        /// Absolute http(s) URL
        url: String,

        /// Custom code (3-20 letters, digits, '-' or '_')
        code: Option<String>,
    },

    /// Print the URL behind a code and count a click
    #[command(visible_alias = "e")]
    Expand { code: String },

    /// List stored URLs, newest first
    #[command(visible_aliases = ["l", "ls"])]
    List,

    /// Show aggregate statistics
    Stats,

    /// Remove never-clicked URLs older than the cleanup window
    Clean {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete a code
    #[command(visible_aliases = ["del", "rm"])]
    Delete {
        code: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (default-code-length, title-max-length, cleanup-days)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
