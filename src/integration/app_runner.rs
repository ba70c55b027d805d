use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::Mutex;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::tui::{Event, Frame, TuiLike},
    integration::runtime::Runtime,
    presentation::pages,
};

/// Drives the dashboard: terminal events in, state updates, frames out.
///
/// The terminal is injected so that tests can run the same loop against
/// an in-memory backend.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike>>,
}

impl AppRunner {
    pub fn new(state: AppState, tui: Arc<Mutex<dyn TuiLike>>) -> Self {
        Self {
            runtime: Runtime::new(state),
            tui,
        }
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Runs until quit is requested or the event stream ends.
    pub async fn run(&mut self) -> Result<()> {
        let size = {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            tui.size()?
        };
        self.runtime
            .send_raw_msg(RawMsg::Resize(size.width, size.height));
        self.cycle().await?;
        self.draw().await?;

        loop {
            let event = {
                let mut tui = self.tui.lock().await;
                tui.next().await
            };
            let Some(event) = event else {
                log::info!("event stream ended");
                break;
            };

            let mut render = matches!(event, Event::Render);
            if let Some(raw_msg) = raw_msg_for(event) {
                self.runtime.send_raw_msg(raw_msg);
            }
            render |= self.cycle().await? > 0;

            if self.runtime.state().system.should_suspend {
                self.tui.lock().await.suspend()?;
                self.tui.lock().await.enter()?;
                self.runtime.send_raw_msg(RawMsg::Resume);
                self.cycle().await?;
                render = true;
            }
            if self.runtime.state().system.should_quit {
                break;
            }
            if render {
                self.draw().await?;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Runs one update cycle and executes its commands. Returns how many
    /// messages were applied.
    async fn cycle(&mut self) -> Result<usize> {
        let cycle = self.runtime.run_update_cycle();
        for cmd in cycle.commands {
            self.execute(cmd).await?;
        }
        Ok(cycle.processed)
    }

    async fn execute(&self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
            }
            Cmd::LogInfo { message } => log::info!("{message}"),
            Cmd::LogError { message } => log::error!("{message}"),
        }
        Ok(())
    }

    async fn draw(&self) -> Result<()> {
        let state = self.runtime.state();
        let mut draw = |frame: &mut Frame<'_>| pages::render(frame, state);
        self.tui.lock().await.draw(&mut draw)
    }
}

/// Terminal events the state cares about. Render is handled by the loop
/// itself.
fn raw_msg_for(event: Event) -> Option<RawMsg> {
    match event {
        Event::Key(key) => Some(RawMsg::Key(key)),
        Event::Tick => Some(RawMsg::Tick),
        Event::Resize(width, height) => Some(RawMsg::Resize(width, height)),
        Event::Closed => Some(RawMsg::Quit),
        Event::Error => Some(RawMsg::Error("terminal input failed".to_string())),
        Event::Render => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case(Event::Tick, Some(RawMsg::Tick))]
    #[case(Event::Resize(80, 24), Some(RawMsg::Resize(80, 24)))]
    #[case(Event::Closed, Some(RawMsg::Quit))]
    #[case(Event::Render, None)]
    #[case(Event::Error, Some(RawMsg::Error("terminal input failed".to_string())))]
    fn test_raw_msg_for(#[case] event: Event, #[case] expected: Option<RawMsg>) {
        assert_eq!(raw_msg_for(event), expected);
    }

    #[test]
    fn test_key_passes_through() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(raw_msg_for(Event::Key(key)), Some(RawMsg::Key(key)));
    }
}
