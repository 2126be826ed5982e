//! # Sayings Architecture
//!
//! Sayings runs a file of line-oriented commands against an in-memory store of
//! aphorisms and proverbs:
//!
//! ```text
//! ADD APHORISM;content="Knowledge is power";author="Francis Bacon"
//! ADD PROVERB;content="No pain, no gain";country="USA"
//! PRINT
//! REM content~"power"
//! PRINT
//! ```
//!
//! The interpreter is a library first. The `sayings` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, loads config, installs logging         │
//! │  - The ONLY place that knows about stdout/exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Reads the command source, classifies lines               │
//! │  - Turns per-line failures into diagnostics                 │
//! │  - Returns structured `CmdResult`s                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (command.rs parser, commands/*.rs logic)     │
//! │  - ADD / REM / PRINT over a RecordStore                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model + Storage (model.rs, store/)                         │
//! │  - Record variants, matching, canonical rendering           │
//! │  - RecordStore trait, InMemoryStore                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Policy
//!
//! Every failure is a [`error::SayingsError`] whose `Display` is the console
//! diagnostic. Per-line errors (unknown type, missing field, malformed ADD or
//! REM, unrecognized command) stop at the line boundary in [`api`]: the line has
//! no effect and the next one runs. Only an unreadable source propagates, and
//! it does so before any line executes.
//!
//! ## Module Overview
//!
//! - [`api`]: The interpreter facade, entry point for running commands
//! - [`command`]: Line grammar and argument parsing
//! - [`commands`]: Business logic for ADD, REM and PRINT
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Record types, construction, matching and rendering
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing, logging setup and printing for the binary (not part of the lib API)

pub mod api;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
