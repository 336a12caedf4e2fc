use crate::api;
use crate::app::App;
use crate::ui::widgets::lists::course_lines;
use crate::ui::widgets::sidebar::{layout_with_sidebar, render_sidebar};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_courses(app: &App, f: &mut Frame<'_>) {
    let (sidebar_area, content) = layout_with_sidebar(app, f.area());
    render_sidebar(app, f, sidebar_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(content);

    let block = Block::default()
        .title(format!("My Courses ({})", app.courses.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    if app.courses.is_empty() {
        let paragraph = Paragraph::new("No courses enrolled.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, chunks[0]);
    } else {
        let mut lines = Vec::new();
        for (index, course) in app.courses.iter().enumerate() {
            let expanded = app.expanded_course == Some(course.id);
            let selected = index == app.selected_course_index;
            let roadmap = api::roadmap_for(course.id);
            lines.extend(course_lines(course, &roadmap, expanded, selected));
            lines.push(TextLine::from(""));
        }
        f.render_widget(Paragraph::new(lines).block(block), chunks[0]);
    }

    render_footer(f, chunks[1]);
}

fn render_footer(f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let help_text = vec![
        Span::styled("↑/↓", key_style),
        Span::raw(": Select   "),
        Span::styled("Enter", key_style),
        Span::raw(": Open course   "),
        Span::styled("r", key_style),
        Span::raw(": Roadmap   "),
        Span::styled("Esc", key_style),
        Span::raw(": Dashboard   "),
        Span::styled("q", key_style),
        Span::raw(": Quit"),
    ];

    let help_paragraph = Paragraph::new(TextLine::from(help_text))
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);

    f.render_widget(help_paragraph, area);
}
