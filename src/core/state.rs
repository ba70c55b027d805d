use std::sync::Arc;
use std::time::Duration;

pub mod nav;
pub mod reveal;
pub mod system;

pub use nav::{MenuState, NavState};
pub use reveal::RevealState;
pub use system::SystemState;

use crate::{
    domain::dataset::Dataset, domain::route::Route, infrastructure::config::Config,
    infrastructure::tui::rate_period,
};

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only for the lifetime of the process.
    pub dataset: Arc<Dataset>,
    pub nav: NavState,
    pub reveal: RevealState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    pub config: Config,
}

impl AppState {
    /// `tick_rate` is in ticks per second; each tick advances the reveal by
    /// one fixed step.
    pub fn new(dataset: Arc<Dataset>, config: Config, route: Route, tick_rate: f64) -> Self {
        let step = tick_step(tick_rate);
        Self {
            nav: NavState::new(route, dataset.alternatives.len()),
            reveal: RevealState::new(route, &config.reveal, step),
            system: SystemState::default(),
            config: ConfigState { config },
            dataset,
        }
    }
}

fn tick_step(tick_rate: f64) -> Duration {
    rate_period(tick_rate, Duration::from_millis(100))
}
