//! # energydash - off-grid energy comparison dashboard
//!
//! A terminal dashboard that compares Solar PV, micro wind and a direct
//! methanol fuel cell (DMFC) as power sources for a remote monitoring
//! station. All figures come from one static JSON dataset that is
//! validated once at start-up.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): application state, owned by the runner
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects the runner executes
//! - **View** (`presentation`): rendering based on current state
//!
//! Everything derived from the dataset (chart series, weighted scores,
//! rich text, reveal timing) lives in `domain` and has no terminal
//! dependency.
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use energydash::{
//!     core::{msg::{nav::NavMsg, Msg}, state::AppState, update::update},
//!     domain::{dataset::Dataset, route::Route},
//!     infrastructure::{config::Config, dataset_loader::BUNDLED_DATASET},
//! };
//!
//! let dataset = Arc::new(Dataset::from_json(BUNDLED_DATASET).expect("bundled dataset"));
//! let state = AppState::new(dataset, Config::default(), Route::Home, 10.0);
//!
//! let (state, commands) = update(Msg::Nav(NavMsg::Navigate(Route::Wind)), state);
//! assert_eq!(state.nav.route, Route::Wind);
//! assert_eq!(commands.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - state, messages, translation and update
//! - [`domain`] - dataset model, validation and derived data
//! - [`infrastructure`] - terminal, CLI, configuration and dataset loading
//! - [`integration`] - the runtime loop tying it all together
//! - [`presentation`] - pages and widgets
//! - [`utils`] - logging, panic handling and directories

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
