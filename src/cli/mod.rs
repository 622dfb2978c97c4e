//! Command Line Interface (CLI) layer for PINMAP.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the table-to-map flow. It
//! wires user-provided options to the underlying library functionality
//! exposed via `pinmap::api`.
//!
//! If you are embedding PINMAP into another application, prefer using
//! the high-level `pinmap::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
