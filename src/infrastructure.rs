//! Infrastructure layer
//!
//! This module handles everything outside the pure core:
//! - TUI foundation (real terminal and in-memory test terminal)
//! - CLI argument processing
//! - Configuration files
//! - Dataset loading and validation at start-up

pub mod cli;
pub mod config;
pub mod dataset_loader;
pub mod tui;
