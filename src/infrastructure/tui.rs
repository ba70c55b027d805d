pub mod real;

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::layout::{Rect, Size};
use serde::{Deserialize, Serialize};

pub type IO = std::io::Stdout;
pub fn io() -> IO {
    std::io::stdout()
}
pub type Frame<'a> = ratatui::Frame<'a>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Reading terminal input failed.
    Error,
    /// The input stream ended.
    Closed,
    Tick,
    Render,
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Interval between events at `rate` per second. Rates that are not
/// positive and finite fall back to `default`.
pub fn rate_period(rate: f64, default: Duration) -> Duration {
    if rate.is_finite() && rate > 0.0 {
        Duration::try_from_secs_f64(1.0 / rate).unwrap_or(default)
    } else {
        default
    }
}

/// The terminal as the runner sees it. Implemented by the real crossterm
/// terminal and by an in-memory one for tests.
pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
    /// Leaves the terminal and stops the process until it is resumed.
    fn suspend(&mut self) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: Rect) -> Result<()>;
    fn size(&self) -> Result<Size>;
    /// Next terminal event, or `None` once the event stream has ended.
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;
}
