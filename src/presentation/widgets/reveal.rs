use ratatui::{prelude::*, widgets::Widget};

/// Draws `inner` according to its entrance progress: nothing at 0,
/// dimmed while in flight, as-is at 1.
pub struct Revealed<W> {
    inner: W,
    progress: f64,
}

impl<W: Widget> Revealed<W> {
    pub fn new(inner: W, progress: f64) -> Self {
        Self { inner, progress }
    }
}

impl<W: Widget> Widget for Revealed<W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.progress <= 0.0 || area.is_empty() {
            return;
        }
        self.inner.render(area, buf);
        if self.progress < 1.0 {
            buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
        }
    }
}
