//! Presentation layer
//!
//! - Pages: full-screen composition and scrolling
//! - Widgets: the dashboard's building blocks
//! - Configuration (styles, keybindings)

pub mod config;
pub mod pages;
pub mod widgets;
