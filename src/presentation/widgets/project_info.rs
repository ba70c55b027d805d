use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{
    domain::{dataset::ProjectInfo, format},
    presentation::widgets::ViewContext,
};

pub struct ProjectInfoCard<'a> {
    info: &'a ProjectInfo,
    ctx: ViewContext<'a>,
}

impl<'a> ProjectInfoCard<'a> {
    pub fn new(info: &'a ProjectInfo, ctx: ViewContext<'a>) -> Self {
        Self { info, ctx }
    }

    fn load_line(&self) -> String {
        let profile = &self.info.load_profile;
        format!(
            "{} {} · {} {}",
            format::number(profile.power.value),
            profile.power.unit,
            format::number(profile.energy.value),
            profile.energy.unit
        )
    }
}

impl Widget for ProjectInfoCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(vec![
                Span::styled("Client ", self.ctx.muted()),
                Span::raw(self.info.client.as_str()),
            ]),
            Line::from(vec![
                Span::styled("Load   ", self.ctx.muted()),
                Span::raw(self.load_line()),
            ]),
        ];
        Paragraph::new(lines)
            .block(self.ctx.panel("Project"))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
