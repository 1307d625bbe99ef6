//! # Urlsh Architecture
//!
//! Urlsh is a **local URL shortener library**. It maps long URLs to short codes,
//! keeps the mapping in a single JSON file, and counts how often each code was
//! expanded. There is no server: every invocation loads the file, runs one
//! operation, and writes the file back if something changed.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - load → command → save-if-changed                         │
//! │  - Owns the code generator and title fetcher strategies     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure operations on an explicit `&mut Store` value        │
//! │  - Code assignment, expand, list, stats, clean, delete      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load() never fails, save() best-effort  │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Store Lifetime
//!
//! The [`model::Store`] document is a plain value. It is constructed by
//! [`store::DataStore::load`], handed to exactly one command, and persisted by
//! [`store::DataStore::save`], which also recomputes the cached `stats` block.
//! Commands never touch the filesystem, so they are tested against values built
//! in memory.
//!
//! ## Concurrency
//!
//! None. The backing file is not locked and the last writer wins. Two
//! invocations racing on the same file can lose an update.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`codegen`]: Short code generation strategies
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Entry`, `Store`, `Link`)
//! - [`validate`]: URL and custom code validation
//! - [`title`]: Best-effort page title fetching
//! - [`config`]: Configuration management
//! - [`logging`]: tracing subscriber setup for the binary
//! - [`error`]: Error types
//! - `cli`: Argument parsing, prompts and terminal rendering (binary only)

pub mod api;
pub mod codegen;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
pub mod title;
pub mod validate;
