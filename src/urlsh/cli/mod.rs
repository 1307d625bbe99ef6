//! # CLI Behavior
//!
//! This is **one possible UI client** for urlsh, not the application itself.
//! The CLI is the only place that knows about terminal I/O, prompts, exit codes
//! and output formatting.
//!
//! ## Commands
//!
//! | Command                  | Aliases       | Mutates |
//! |--------------------------|---------------|---------|
//! | `shorten <url> [code]`   | `s`           | yes     |
//! | `expand <code>`          | `e`           | yes     |
//! | `list`                   | `l`, `ls`     | no      |
//! | `stats`                  |               | no      |
//! | `clean [--yes]`          |               | yes     |
//! | `delete <code> [--yes]`  | `del`, `rm`   | yes     |
//! | `config [key] [value]`   |               | config  |
//!
//! Running `urlsh` with no command prints help.
//!
//! ## Confirmation
//!
//! `clean` and `delete` ask before removing anything. `--yes` skips the
//! question. Without a terminal on stdin and without `--yes` the operation is
//! cancelled, so scripts never hang on a prompt.
//!
//! ## Data Directory
//!
//! `--dir <path>`, else `$URLSH_HOME`, else the platform data directory
//! (e.g. `~/.local/share/urlsh/` on Linux). It holds `urls.json` and the
//! optional `config.json`.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers that call the API
//! - `render`: Output formatting (colors, relative times, truncation)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
