//! # Urlsh CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and maps failures to an exit status.
//!
//! ```text
//! urlsh shorten https://example.com/some/long/path   # → k3Zq
//! urlsh expand k3Zq                                  # → the URL, counts a click
//! urlsh list | stats | clean | delete <code> | config
//! ```
//!
//! User-facing failures (invalid URL, taken or unknown code) print a single
//! `Error:` line on stderr and exit with status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
