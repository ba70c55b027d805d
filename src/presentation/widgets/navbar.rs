use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Tabs},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    domain::{
        dataset::Dataset,
        route::Route,
        theme::{contrast_text, FALLBACK_ACCENT},
    },
    presentation::widgets::{rows, ViewContext},
};

pub const NAVBAR_HEIGHT: u16 = 3;
const MENU_WIDTH: u16 = 30;

/// Title bar, page tabs and an accent rule, all in the page colour.
pub struct Navbar<'a> {
    title: &'a str,
    client: &'a str,
    route: Route,
    ctx: ViewContext<'a>,
}

impl<'a> Navbar<'a> {
    pub fn new(dataset: &'a Dataset, route: Route, ctx: ViewContext<'a>) -> Self {
        Self {
            title: &dataset.project_info.title,
            client: &dataset.project_info.client,
            route,
            ctx,
        }
    }

    pub fn titles() -> Vec<String> {
        Route::all()
            .into_iter()
            .enumerate()
            .map(|(i, route)| format!("{} {route}", i + 1))
            .collect()
    }
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = self.ctx.theme.accent;
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(accent));
        let inner = block.inner(area);
        block.render(area, buf);

        let [title_area, tabs_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

        // The client goes on the right when there is room for both.
        let client_width = rows(self.client.width()).saturating_add(2);
        let room = title_area.width > rows(self.title.width())
            .saturating_add(client_width)
            .saturating_add(4);
        let [left, right] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(if room { client_width } else { 0 }),
        ])
        .areas(title_area);

        let bar = Style::default().fg(self.ctx.theme.on_accent).bg(accent);
        Paragraph::new(Span::styled(
            format!(" {}", self.title),
            bar.add_modifier(Modifier::BOLD),
        ))
        .style(bar)
        .render(left, buf);
        if room {
            Paragraph::new(format!("{} ", self.client))
                .style(bar)
                .alignment(Alignment::Right)
                .render(right, buf);
        }

        Tabs::new(Self::titles())
            .select(self.route.index())
            .style(self.ctx.muted())
            .highlight_style(
                Style::default()
                    .fg(accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .render(tabs_area, buf);
    }
}

/// The technology menu, drawn over the page below the navbar.
pub struct MenuPopup<'a> {
    dataset: &'a Dataset,
    cursor: usize,
    ctx: ViewContext<'a>,
}

impl<'a> MenuPopup<'a> {
    pub fn new(dataset: &'a Dataset, cursor: usize, ctx: ViewContext<'a>) -> Self {
        Self {
            dataset,
            cursor,
            ctx,
        }
    }

    /// Where the popup goes on a screen of size `screen`.
    pub fn area(screen: Rect) -> Rect {
        let height = rows(Route::technologies().len()).saturating_add(2);
        Rect {
            x: screen.x + 1,
            y: screen.y + NAVBAR_HEIGHT,
            width: MENU_WIDTH.min(screen.width.saturating_sub(1)),
            height: height.min(screen.height.saturating_sub(NAVBAR_HEIGHT)),
        }
    }

    fn item(&self, route: Route) -> ListItem<'static> {
        let (name, color) = match route.resolve(self.dataset) {
            Some(alt) => (alt.name.clone(), Color::from(alt.color)),
            None => (route.to_string(), FALLBACK_ACCENT),
        };
        ListItem::new(Line::from(vec![
            Span::styled("● ", Style::default().fg(color)),
            Span::raw(name),
        ]))
    }
}

impl Widget for MenuPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = Route::technologies()
            .into_iter()
            .map(|route| self.item(route))
            .collect();
        let accent = self.ctx.theme.accent;
        let list = List::new(items)
            .block(
                self.ctx
                    .panel("Systems")
                    .border_style(Style::default().fg(accent)),
            )
            .highlight_style(
                Style::default()
                    .fg(contrast_text(accent))
                    .bg(accent)
                    .add_modifier(Modifier::BOLD),
            );
        let mut state = ListState::default().with_selected(Some(self.cursor));

        Clear.render(area, buf);
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
