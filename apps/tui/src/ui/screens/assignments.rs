use crate::api::format_due_date;
use crate::app::App;
use crate::ui::widgets::sidebar::{layout_with_sidebar, render_sidebar};
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_assignments(app: &App, f: &mut Frame<'_>) {
    let (sidebar_area, content) = layout_with_sidebar(app, f.area());
    render_sidebar(app, f, sidebar_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(content);

    if app.tasks.is_empty() {
        let block = Block::default()
            .title("Assignments")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));
        let paragraph = Paragraph::new("Nothing due. Enjoy the break!")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, chunks[0]);
    } else {
        render_task_table(app, f, chunks[0]);
    }

    render_footer(f, chunks[1]);
}

fn render_task_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Task"),
        Cell::from("Type"),
        Cell::from("Course"),
        Cell::from("Due"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = app.tasks.len();
    let max_visible_rows = area.height.saturating_sub(4) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.selected_task_index);

    let rows = app
        .tasks
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .map(|(index, task)| {
            let style = if index == app.selected_task_index {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else if task.urgent {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };

            Row::new(vec![
                Cell::from(if task.urgent { "!" } else { "" }),
                Cell::from(task.title.clone()),
                Cell::from(task.kind.label()),
                Cell::from(task.course.clone()),
                Cell::from(format_due_date(&task.due_date)),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(2),
        Constraint::Length(28),
        Constraint::Length(12),
        Constraint::Length(20),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    "Assignments ({} of {})",
                    app.selected_task_index + 1,
                    total_rows
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_footer(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let help_text = vec![
        Span::styled("↑/↓", key_style),
        Span::raw(": Navigate   "),
        Span::styled("Home/End", key_style),
        Span::raw(": First/Last   "),
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
