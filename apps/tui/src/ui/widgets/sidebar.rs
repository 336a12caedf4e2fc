use crate::app::App;
use crate::domain::Page;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const EXPANDED_WIDTH: u16 = 22;
const COLLAPSED_WIDTH: u16 = 5;

/// Splits the frame into the sidebar column and the content area.
pub fn layout_with_sidebar(app: &App, area: Rect) -> (Rect, Rect) {
    let width = if app.sidebar_collapsed {
        COLLAPSED_WIDTH
    } else {
        EXPANDED_WIDTH
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(width), Constraint::Min(20)])
        .split(area);

    (chunks[0], chunks[1])
}

/// One label per nav entry with its active flag. Pure so the exactly-one-
/// marker rule can be checked without a terminal.
pub fn nav_items(current: Page, collapsed: bool) -> Vec<(String, bool)> {
    Page::NAV
        .iter()
        .map(|page| {
            let label = if collapsed {
                page.glyph().to_string()
            } else {
                format!("{} {}", page.glyph(), page.label())
            };
            // The detail view keeps the Courses marker lit.
            let active =
                *page == current || (current == Page::CourseDetail && *page == Page::Courses);
            (label, active)
        })
        .collect()
}

pub fn render_sidebar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = if app.sidebar_collapsed {
        "SL"
    } else {
        "SagaLearn"
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let mut lines = vec![TextLine::from("")];
    for (index, (label, active)) in nav_items(app.page, app.sidebar_collapsed).iter().enumerate() {
        let style = if *active {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if *active { "▌" } else { " " };

        lines.push(TextLine::from(vec![
            Span::raw(format!("{marker}{} ", index + 1)),
            Span::styled(label.clone(), style),
        ]));
    }

    if !app.sidebar_collapsed {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(
            " s: collapse  F1: help",
            Style::default().fg(Color::DarkGray),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
