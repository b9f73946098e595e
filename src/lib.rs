//! lintrun core library.
//!
//! This crate exposes the building blocks of the lint task: configuration
//! discovery, file-list resolution, the engine plugin seam, and the runner
//! that reduces merged lint results to an exit code.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `engine`: Traits implemented by a loaded lint engine, plus the loader.
//! - `error`: Fatal user-facing error type.
//! - `files`: Glob expansion with excludes and BOM-aware reads.
//! - `models`: Task options, targets, and failure/fix/result records.
//! - `output`: Warnings, banners, and error lines.
//! - `runner`: The lint task itself.
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod files;
pub mod models;
pub mod output;
pub mod runner;
