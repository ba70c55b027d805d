use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Cell, Row, Table,
    },
};

use crate::{
    domain::{
        dataset::Category,
        format,
        matrix::{self, SystemScores, SCORE_MAX},
    },
    presentation::widgets::{rows, ViewContext},
};
use unicode_width::UnicodeWidthStr;

/// Canvas half-width; leaves room for axis labels around the unit circle.
const BOUND: f64 = 1.45;
const LABEL_RADIUS: f64 = 1.15;

/// Radar chart of every system's scores, one axis per category.
pub struct RadarChart<'a> {
    categories: &'a [Category],
    systems: &'a [SystemScores<'a>],
    progress: f64,
    ctx: ViewContext<'a>,
}

impl<'a> RadarChart<'a> {
    pub fn new(
        categories: &'a [Category],
        systems: &'a [SystemScores<'a>],
        ctx: ViewContext<'a>,
    ) -> Self {
        Self {
            categories,
            systems,
            progress: 1.0,
            ctx,
        }
    }

    pub fn progress(mut self, progress: f64) -> Self {
        self.progress = progress;
        self
    }

    fn draw_grid(&self, ctx: &mut Context<'_>) {
        let axes = self.categories.len();
        // Rings at every whole score.
        for ring in 1..=SCORE_MAX as usize {
            let radius = ring as f64 / SCORE_MAX;
            let points: Vec<(f64, f64)> = (0..axes)
                .map(|i| {
                    let (x, y) = matrix::axis_direction(i, axes);
                    (x * radius, y * radius)
                })
                .collect();
            draw_polygon(ctx, &points, Color::DarkGray);
        }
        for i in 0..axes {
            let (x, y) = matrix::axis_direction(i, axes);
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: 0.0,
                x2: x,
                y2: y,
                color: Color::DarkGray,
            });
        }
    }

    fn draw_labels(&self, ctx: &mut Context<'_>) {
        let axes = self.categories.len();
        for (i, category) in self.categories.iter().enumerate() {
            let (x, y) = matrix::axis_direction(i, axes);
            let offset = label_offset(&category.name, x);
            ctx.print(
                x * LABEL_RADIUS - offset,
                y * LABEL_RADIUS,
                Line::styled(category.name.clone(), self.ctx.muted()),
            );
        }
    }
}

/// Left-hand labels are shifted so that they end at the axis tip. The
/// shift assumes a canvas about 60 cells wide.
fn label_offset(name: &str, x: f64) -> f64 {
    if x < -0.1 {
        name.width() as f64 * 2.0 * BOUND / 60.0
    } else {
        0.0
    }
}

fn draw_polygon(ctx: &mut Context<'_>, points: &[(f64, f64)], color: Color) {
    if points.len() < 2 {
        return;
    }
    for (i, &(x1, y1)) in points.iter().enumerate() {
        let (x2, y2) = points[(i + 1) % points.len()];
        ctx.draw(&CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }
}

impl Widget for RadarChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let axes = self.categories.len();
        Canvas::default()
            .block(self.ctx.panel("Decision matrix"))
            .marker(Marker::Braille)
            .x_bounds([-BOUND, BOUND])
            .y_bounds([-BOUND, BOUND])
            .paint(|ctx| {
                self.draw_grid(ctx);
                ctx.layer();
                if self.progress > 0.0 {
                    for system in self.systems {
                        let points = matrix::radar_points(system.values, axes, self.progress);
                        draw_polygon(ctx, &points, system.color);
                    }
                }
                ctx.layer();
                self.draw_labels(ctx);
            })
            .render(area, buf);
    }
}

/// The scores as a table: one row per category, one column per system,
/// and the weighted totals in the last row.
pub struct ScoreTable<'a> {
    categories: &'a [Category],
    systems: &'a [SystemScores<'a>],
    ctx: ViewContext<'a>,
}

impl<'a> ScoreTable<'a> {
    pub fn new(
        categories: &'a [Category],
        systems: &'a [SystemScores<'a>],
        ctx: ViewContext<'a>,
    ) -> Self {
        Self {
            categories,
            systems,
            ctx,
        }
    }

    pub fn height(categories: usize) -> u16 {
        // borders, header, one row per category, totals
        rows(categories).saturating_add(4)
    }
}

impl Widget for ScoreTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let leader = matrix::leader(self.systems);

        let mut header = vec![Cell::from("Category"), Cell::from("Weight")];
        header.extend(self.systems.iter().map(|system| {
            Cell::from(Span::styled(
                format!("● {}", system.name),
                Style::default().fg(system.color),
            ))
        }));

        let mut rows: Vec<Row> = self
            .categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let mut cells = vec![
                    Cell::from(category.name.as_str()),
                    Cell::from(Span::styled(
                        format!("{:.0}%", category.weight * 100.0),
                        self.ctx.muted(),
                    )),
                ];
                cells.extend(self.systems.iter().map(|system| {
                    system
                        .values
                        .get(i)
                        .map(|v| Cell::from(format::number(*v)))
                        .unwrap_or_default()
                }));
                Row::new(cells)
            })
            .collect();

        let mut totals = vec![Cell::from("Weighted total"), Cell::from("")];
        totals.extend(self.systems.iter().map(|system| {
            let style = if leader == Some(system.id) {
                Style::default()
                    .fg(system.color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Cell::from(Span::styled(format!("{:.2}", system.total), style))
        }));
        rows.push(Row::new(totals).style(self.ctx.title()));

        let mut widths = vec![Constraint::Length(14), Constraint::Length(6)];
        widths.extend(self.systems.iter().map(|_| Constraint::Fill(1)));

        let table = Table::new(rows, widths)
            .header(Row::new(header).style(self.ctx.title()))
            .block(self.ctx.panel("Weighted scores (1-5)"))
            .column_spacing(1);
        Widget::render(table, area, buf);
    }
}
