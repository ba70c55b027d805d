use std::time::Duration;

use crate::{
    core::{cmd::Cmd, msg::reveal::RevealMsg},
    domain::{
        reveal::{RevealClock, RevealPlan, Section},
        route::Route,
    },
    infrastructure::config::RevealConfig,
};

/// Entrance animation of the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealState {
    pub clock: RevealClock,
    pub enabled: bool,
    pub speed: f64,
    /// Time added per tick. Fixed so that a replay always looks the same.
    pub step: Duration,
}

impl Default for RevealState {
    fn default() -> Self {
        Self {
            clock: RevealClock::finished(),
            enabled: false,
            speed: 1.0,
            step: Duration::from_millis(100),
        }
    }
}

impl RevealState {
    pub fn new(route: Route, config: &RevealConfig, step: Duration) -> Self {
        let mut state = Self {
            clock: RevealClock::finished(),
            enabled: config.enabled,
            speed: config.speed,
            step,
        };
        state.restart(route);
        state
    }

    /// Starts the plan of `route` from the beginning.
    pub fn restart(&mut self, route: Route) {
        self.clock = if self.enabled {
            RevealClock::new(RevealPlan::for_route(route).scaled(self.speed))
        } else {
            RevealClock::finished()
        };
    }

    pub fn update(&mut self, msg: RevealMsg, route: Route) -> Vec<Cmd> {
        match msg {
            RevealMsg::Tick(dt) => {
                self.clock.advance(dt);
                vec![]
            }
            RevealMsg::Skip => {
                self.clock.skip();
                vec![]
            }
            RevealMsg::Replay => {
                self.restart(route);
                vec![]
            }
        }
    }

    pub fn progress(&self, section: Section) -> f64 {
        self.clock.progress(section)
    }

    pub fn is_animating(&self) -> bool {
        !self.clock.is_complete()
    }
}
