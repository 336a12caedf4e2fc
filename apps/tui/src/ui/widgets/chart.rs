use crate::chart::{self, DrawSurface, Rgb};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Context, Rectangle};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

// Virtual pixel space the chart geometry is computed in; the canvas scales
// it to whatever terminal area is available, and the caller redraws every
// frame so resizes are covered for free.
const SURFACE_WIDTH: f64 = 400.0;
const SURFACE_HEIGHT: f64 = 300.0;

/// Adapter from the chart's top-left-origin surface to the bottom-left-
/// origin ratatui canvas.
struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    height: f64,
}

impl DrawSurface for CanvasSurface<'_, '_> {
    fn clear(&mut self, _width: f64, _height: f64) {
        // The canvas starts each frame empty.
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgb) {
        self.ctx.draw(&Rectangle {
            x,
            y: self.height - y - height,
            width,
            height,
            color: to_color(color),
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: Rgb) {
        let line = TextLine::from(Span::styled(
            text.to_string(),
            Style::default().fg(to_color(color)),
        ));
        self.ctx.print(x, self.height - y, line);
    }
}

const fn to_color(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

pub fn render_performance_chart(f: &mut Frame<'_>, area: Rect) {
    let canvas = Canvas::default()
        .block(
            Block::default()
                .title("Weekly Performance")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .marker(Marker::Braille)
        .x_bounds([0.0, SURFACE_WIDTH])
        .y_bounds([0.0, SURFACE_HEIGHT])
        .paint(|ctx| {
            let mut surface = CanvasSurface {
                ctx,
                height: SURFACE_HEIGHT,
            };
            chart::draw_performance_chart(&mut surface, SURFACE_WIDTH, SURFACE_HEIGHT);
        });

    f.render_widget(canvas, area);
}
