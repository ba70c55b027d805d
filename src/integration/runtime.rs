use std::collections::VecDeque;

use crate::core::{
    cmd::Cmd,
    msg::Msg,
    raw_msg::RawMsg,
    state::AppState,
    translator::translate_raw_to_domain,
    update::update,
};

/// Result of draining the message queues once.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Cycle {
    /// Domain messages applied to the state.
    pub processed: usize,
    pub commands: Vec<Cmd>,
}

/// Owns the state and feeds queued messages through translate and update.
pub struct Runtime {
    state: AppState,
    raw_msg_queue: VecDeque<RawMsg>,
    msg_queue: VecDeque<Msg>,
}

impl Runtime {
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            raw_msg_queue: VecDeque::new(),
            msg_queue: VecDeque::new(),
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Translates every queued raw message, then applies every domain
    /// message in order. Commands are returned for the caller to execute.
    pub fn run_update_cycle(&mut self) -> Cycle {
        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            if !raw_msg.is_frequent() {
                log::debug!("raw message: {raw_msg:?}");
            }
            let msgs = translate_raw_to_domain(raw_msg, &self.state);
            self.msg_queue.extend(msgs);
        }

        let mut cycle = Cycle::default();
        while let Some(msg) = self.msg_queue.pop_front() {
            if !msg.is_frequent() {
                log::debug!("message: {msg:?}");
            }
            let (state, commands) = update(msg, self.state.clone());
            self.state = state;
            cycle.processed += 1;
            cycle.commands.extend(commands);
        }
        cycle
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::{
        core::{
            cmd::TuiCommand,
            msg::{nav::NavMsg, system::SystemMsg},
        },
        domain::{
            dataset::{fixtures::dataset, Dataset},
            route::Route,
        },
        infrastructure::config::Config,
    };

    #[fixture]
    fn runtime(dataset: Dataset) -> Runtime {
        #[allow(clippy::unwrap_used)]
        let config = Config::embedded().unwrap();
        Runtime::new(AppState::new(Arc::new(dataset), config, Route::Home, 10.0))
    }

    #[rstest]
    fn test_empty_cycle(mut runtime: Runtime) {
        assert_eq!(runtime.run_update_cycle(), Cycle::default());
    }

    #[rstest]
    fn test_raw_key_navigates(mut runtime: Runtime) {
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char('3'),
            KeyModifiers::NONE,
        )));
        let cycle = runtime.run_update_cycle();
        assert_eq!(runtime.state().nav.route, Route::Wind);
        assert_eq!(cycle.processed, 1);
        assert_eq!(cycle.commands, vec![Cmd::log_info("navigated to /wind")]);
    }

    #[rstest]
    fn test_messages_apply_in_order(mut runtime: Runtime) {
        runtime.send_msg(Msg::Nav(NavMsg::Navigate(Route::Dmfc)));
        runtime.send_msg(Msg::Nav(NavMsg::PrevPage));
        runtime.send_raw_msg(RawMsg::Resize(100, 40));
        let cycle = runtime.run_update_cycle();
        assert_eq!(runtime.state().nav.route, Route::Wind);
        assert_eq!(runtime.state().system.viewport, (100, 40));
        assert_eq!(cycle.processed, 3);
        assert!(cycle.commands.contains(&Cmd::Tui(TuiCommand::Resize {
            width: 100,
            height: 40
        })));
    }

    #[rstest]
    fn test_quit(mut runtime: Runtime) {
        runtime.send_msg(Msg::System(SystemMsg::Quit));
        runtime.run_update_cycle();
        assert!(runtime.state().system.should_quit);
    }
}
