use crate::api;
use crate::app::state::CourseDetailView;
use crate::app::App;
use crate::ui::widgets::lists::roadmap_lines;
use crate::ui::widgets::sidebar::{layout_with_sidebar, render_sidebar};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_course_detail(app: &App, f: &mut Frame<'_>) {
    let (sidebar_area, content) = layout_with_sidebar(app, f.area());
    render_sidebar(app, f, sidebar_area);

    match &app.course_detail {
        None | Some(CourseDetailView::Loading) => render_notice(f, content, "Loading course..."),
        Some(CourseDetailView::NotFound(id)) => {
            render_notice(f, content, &format!("Course {id} was not found."));
        }
        Some(CourseDetailView::Loaded(detail)) => render_detail(detail, f, content),
    }
}

fn render_notice(f: &mut Frame<'_>, area: Rect, message: &str) {
    let block = Block::default()
        .title("Course Detail")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let lines = vec![
        TextLine::from(""),
        TextLine::from(message.to_string()),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Esc: back to courses",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_detail(detail: &api::CourseDetail, f: &mut Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Overview
            Constraint::Length(3), // Progress gauge
            Constraint::Min(5),    // Roadmap
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let overview = vec![
        TextLine::from(Span::styled(
            detail.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            format!("Instructor: {}", detail.instructor),
            Style::default().fg(Color::Gray),
        )),
        TextLine::from(Span::styled(
            detail.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        TextLine::from(Span::styled(
            format!(
                "Modules completed: {} / {}",
                detail.completed_modules, detail.modules
            ),
            Style::default().fg(Color::Cyan),
        )),
    ];

    f.render_widget(
        Paragraph::new(Text::from(overview))
            .block(
                Block::default()
                    .title("Course Detail")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Magenta)),
            )
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let gauge = Gauge::default()
        .block(Block::default().title("Progress").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(u16::from(detail.progress.min(100)));
    f.render_widget(gauge, chunks[1]);

    let roadmap = api::roadmap_for(detail.id);
    let roadmap_text = if roadmap.is_empty() {
        vec![TextLine::from(Span::styled(
            "No roadmap published yet.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        roadmap_lines(&roadmap)
    };

    f.render_widget(
        Paragraph::new(Text::from(roadmap_text)).block(
            Block::default()
                .title("Roadmap")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        ),
        chunks[2],
    );

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let footer = Paragraph::new(TextLine::from(vec![
        Span::styled("Esc", key_style),
        Span::raw(": Back   "),
        Span::styled("q", key_style),
        Span::raw(": Quit"),
    ]))
    .block(Block::default().borders(Borders::TOP))
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[3]);
}
