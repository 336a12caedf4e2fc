use crate::app::App;
use crate::domain::LeaderboardPeriod;
use crate::ui::widgets::sidebar::{layout_with_sidebar, render_sidebar};
use crate::ui::widgets::tables::{leaderboard_rows, Trend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs};
use ratatui::Frame;

pub fn render_leaderboard(app: &App, f: &mut Frame<'_>) {
    let (sidebar_area, content) = layout_with_sidebar(app, f.area());
    render_sidebar(app, f, sidebar_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(content);

    render_period_tabs(app, f, chunks[0]);

    match &app.leaderboard {
        Some(snapshot) => {
            let rows = leaderboard_rows(snapshot, app.leaderboard_period);
            render_rows(&rows, f, chunks[1]);
        }
        None => {
            let block = Block::default()
                .title("Leaderboard")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta));
            let paragraph = Paragraph::new("Loading leaderboard...")
                .block(block)
                .alignment(Alignment::Center);
            f.render_widget(paragraph, chunks[1]);
        }
    }

    render_footer(f, chunks[2]);
}

fn render_period_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = LeaderboardPeriod::ALL
        .iter()
        .map(|period| TextLine::from(period.label()))
        .collect::<Vec<_>>();

    let selected = match app.leaderboard_period {
        LeaderboardPeriod::Weekly => 0,
        LeaderboardPeriod::Monthly => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

fn render_rows(rows: &[crate::ui::widgets::tables::LeaderboardRow], f: &mut Frame<'_>, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Rank"),
        Cell::from("Name"),
        Cell::from("Dept"),
        Cell::from("Points"),
        Cell::from("Change"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let table_rows = rows.iter().map(|row| {
        let style = if row.is_current_user {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let change_style = match row.trend {
            Trend::Up => Style::default().fg(Color::Green),
            Trend::Down => Style::default().fg(Color::Red),
            Trend::Flat => Style::default().fg(Color::Gray),
        };

        Row::new(vec![
            Cell::from(format!("#{}", row.rank)),
            Cell::from(if row.is_current_user {
                format!("{} (you)", row.name)
            } else {
                row.name.clone()
            }),
            Cell::from(row.department.clone()),
            Cell::from(row.points.to_string()),
            Cell::from(Span::styled(row.change.clone(), change_style)),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(5),
        Constraint::Length(24),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(8),
    ];

    let table = Table::new(table_rows, widths)
        .header(header)
        .block(
            Block::default()
                .title("Leaderboard")
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
        Span::styled("←/→", key_style),
        Span::raw(": Switch period   "),
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
