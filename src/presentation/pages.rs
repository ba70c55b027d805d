//! Full-screen page composition
//!
//! A page is a vertical stack of rows whose heights depend only on the
//! dataset and the terminal width. The page is drawn into an off-screen
//! buffer as tall as its content, and the visible window starting at the
//! scroll offset is copied into the frame between the navbar and the
//! status bar.

pub mod home;
pub mod technology;

use ratatui::prelude::*;

use crate::{
    core::state::{AppState, RevealState},
    domain::{dataset::Dataset, route::Route, theme::PageTheme},
    presentation::widgets::{
        navbar::{MenuPopup, Navbar, NAVBAR_HEIGHT},
        status_bar::{StatusBarWidget, STATUS_BAR_HEIGHT},
        ViewContext,
    },
};

/// Rows taken by the navbar and the status bar.
pub const CHROME_HEIGHT: u16 = NAVBAR_HEIGHT + STATUS_BAR_HEIGHT;

/// Everything a page body needs to draw itself.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub dataset: &'a Dataset,
    pub route: Route,
    /// Highlighted alternative of the home cost chart.
    pub selected: usize,
    pub reveal: &'a RevealState,
    pub ctx: ViewContext<'a>,
}

/// Total height of the page body at `width`.
pub fn content_height(route: Route, dataset: &Dataset, width: u16) -> u16 {
    let rows: u16 = match route {
        Route::Home => home::rows(dataset, width).iter().map(|(_, h)| h).sum(),
        _ => technology::rows(route.resolve(dataset), width)
            .iter()
            .map(|(_, h)| h)
            .sum(),
    };
    rows.max(1)
}

/// Largest scroll offset that still fills the body on a `width` x
/// `height` terminal.
pub fn max_scroll(route: Route, dataset: &Dataset, width: u16, height: u16) -> u16 {
    let visible = height.saturating_sub(CHROME_HEIGHT);
    content_height(route, dataset, width).saturating_sub(visible)
}

/// Lays `rows` out top to bottom inside `area`.
pub(crate) fn stack<R: Copy>(rows: &[(R, u16)], area: Rect) -> Vec<(R, Rect)> {
    let mut y = area.y;
    rows.iter()
        .map(|&(row, height)| {
            let rect = Rect::new(area.x, y, area.width, height).intersection(area);
            y = y.saturating_add(height);
            (row, rect)
        })
        .collect()
}

/// The page body scrolled to `scroll`.
pub struct ScrolledPage<'a> {
    view: PageView<'a>,
    scroll: u16,
}

impl<'a> ScrolledPage<'a> {
    pub fn new(view: PageView<'a>, scroll: u16) -> Self {
        Self { view, scroll }
    }

    /// Draws the whole body, however tall, into its own buffer.
    pub fn render_content(&self, width: u16) -> Buffer {
        let height = content_height(self.view.route, self.view.dataset, width);
        let area = Rect::new(0, 0, width, height);
        let mut content = Buffer::empty(area);
        match self.view.route {
            Route::Home => home::render(&self.view, area, &mut content),
            _ => technology::render(&self.view, area, &mut content),
        }
        content
    }
}

impl Widget for ScrolledPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let content = self.render_content(area.width);
        let content_height = content.area.height;
        for row in 0..area.height {
            let source_y = self.scroll.saturating_add(row);
            if source_y >= content_height {
                break;
            }
            for x in 0..area.width {
                buf[(area.x + x, area.y + row)] = content[(x, source_y)].clone();
            }
        }
    }
}

/// Draws the whole screen for `state`.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let route = state.nav.route;
    let dataset = state.dataset.as_ref();
    let theme = PageTheme::for_route(route, dataset);
    let ctx = ViewContext::new(theme, &state.config.config.styles);

    let [nav_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(NAVBAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .areas(area);

    frame.render_widget(Navbar::new(dataset, route, ctx), nav_area);
    let view = PageView {
        dataset,
        route,
        selected: state.nav.selected,
        reveal: &state.reveal,
        ctx,
    };
    frame.render_widget(ScrolledPage::new(view, state.nav.scroll), body_area);
    frame.render_widget(
        StatusBarWidget::new(route, state.system.status_message.as_deref(), ctx),
        status_area,
    );

    if state.nav.menu.open {
        frame.render_widget(
            MenuPopup::new(dataset, state.nav.menu.cursor, ctx),
            MenuPopup::area(area),
        );
    }
}
