use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    domain::route::Route,
    presentation::widgets::{rows, ViewContext},
};

pub const STATUS_BAR_HEIGHT: u16 = 1;

const HINTS: &str = "tab/1-4 pages · m menu · ↑↓ scroll · space skip · q quit";

pub struct StatusBarWidget<'a> {
    route: Route,
    message: Option<&'a str>,
    ctx: ViewContext<'a>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(route: Route, message: Option<&'a str>, ctx: ViewContext<'a>) -> Self {
        Self {
            route,
            message,
            ctx,
        }
    }

    /// The status message replaces the key hints while it is set.
    pub fn text(&self) -> &str {
        self.message.unwrap_or(HINTS)
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let path = format!(" {} ", self.route.path());
        let [path_area, text_area] = Layout::horizontal([
            Constraint::Length(rows(path.len())),
            Constraint::Min(0),
        ])
        .areas(area);

        Paragraph::new(path)
            .style(
                Style::default()
                    .fg(self.ctx.theme.on_accent)
                    .bg(self.ctx.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .render(path_area, buf);

        let text_style = if self.message.is_some() {
            self.ctx.warning()
        } else {
            self.ctx.muted()
        };
        Paragraph::new(format!(" {}", self.text()))
            .style(text_style)
            .render(text_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::{
        domain::{
            dataset::{fixtures::dataset, Dataset},
            theme::PageTheme,
        },
        presentation::{
            config::Styles,
            widgets::testing::{render, render_lines},
        },
    };

    #[rstest]
    fn test_hints_without_message(dataset: Dataset) {
        let styles = Styles::default();
        let ctx = ViewContext::new(PageTheme::for_route(Route::Wind, &dataset), &styles);
        let lines = render_lines(StatusBarWidget::new(Route::Wind, None, ctx), 100, 1);
        assert!(lines[0].starts_with(" /wind "), "{lines:#?}");
        assert!(lines[0].contains("q quit"), "{lines:#?}");
    }

    #[rstest]
    fn test_message_replaces_hints(dataset: Dataset) {
        let styles = Styles::default();
        let ctx = ViewContext::new(PageTheme::for_route(Route::Home, &dataset), &styles);
        let widget = StatusBarWidget::new(Route::Home, Some("Error: boom"), ctx);
        assert_eq!(widget.text(), "Error: boom");
        let lines = render_lines(widget, 100, 1);
        assert!(lines[0].contains("Error: boom"), "{lines:#?}");
        assert!(!lines[0].contains("q quit"), "{lines:#?}");
    }

    #[rstest]
    fn test_message_uses_warning_style(dataset: Dataset) -> Result<(), json5::Error> {
        let styles: Styles = json5::from_str(r#"{ "warning": "red" }"#)?;
        let ctx = ViewContext::new(PageTheme::for_route(Route::Home, &dataset), &styles);
        let widget = StatusBarWidget::new(Route::Home, Some("Error: boom"), ctx);
        let buf = render(widget, 40, 1);
        // " / " occupies the first three cells, then a space, then the text
        assert_eq!(buf[(4, 0)].symbol(), "E");
        assert_eq!(buf[(4, 0)].fg, Color::Red);

        let styles = Styles::default();
        let ctx = ViewContext::new(PageTheme::for_route(Route::Home, &dataset), &styles);
        let buf = render(StatusBarWidget::new(Route::Home, Some("x"), ctx), 40, 1);
        assert_eq!(buf[(4, 0)].fg, Color::Yellow);
        Ok(())
    }
}
