use crate::api;
use crate::app::state::DashboardPanel;
use crate::app::App;
use crate::ui::widgets::chart::render_performance_chart;
use crate::ui::widgets::lists::{activity_lines, club_lines, course_lines, skill_lines, task_lines};
use crate::ui::widgets::sidebar::{layout_with_sidebar, render_sidebar};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_dashboard(app: &App, f: &mut Frame<'_>) {
    let (sidebar_area, content) = layout_with_sidebar(app, f.area());
    render_sidebar(app, f, sidebar_area);

    if app.loading && !app.initial_load_done {
        let paragraph = Paragraph::new("Loading dashboard...")
            .block(Block::default().title("Dashboard").borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, content);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // User header
            Constraint::Min(10),    // Panel grid
            Constraint::Length(12), // Chart + skills
        ])
        .split(content);

    render_header(app, f, rows[0]);
    render_panel_grid(app, f, rows[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);
    render_performance_chart(f, bottom[0]);
    render_skills_panel(app, f, bottom[1]);
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let lines = app.user.as_ref().map_or_else(
        || vec![TextLine::from("Signing in...")],
        |user| {
            vec![
                TextLine::from(Span::styled(
                    format!("Welcome back, {}!", user.name),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                TextLine::from(Span::styled(
                    format!(
                        "Level {} · {} XP · {} day streak · Rank #{}",
                        user.level, user.xp, user.streak_days, user.rank
                    ),
                    Style::default().fg(Color::Gray),
                )),
            ]
        },
    );

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_panel_grid(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    render_courses_panel(app, f, left[0]);
    render_tasks_panel(app, f, left[1]);
    render_clubs_panel(app, f, right[0]);
    render_activities_panel(app, f, right[1]);
}

/// The focused panel gets the highlighted border.
fn panel_block(app: &App, panel: DashboardPanel) -> Block<'static> {
    let style = if app.active_panel == panel {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    Block::default()
        .title(panel.title())
        .borders(Borders::ALL)
        .border_style(style)
}

fn render_courses_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.active_panel == DashboardPanel::Courses;

    let mut lines = Vec::new();
    for (index, course) in app.courses.iter().enumerate() {
        let expanded = app.expanded_course == Some(course.id);
        let selected = focused && index == app.selected_course_index;
        let roadmap = api::roadmap_for(course.id);
        lines.extend(course_lines(course, &roadmap, expanded, selected));
    }
    if lines.is_empty() {
        lines.push(TextLine::from(Span::styled(
            "No courses enrolled",
            Style::default().fg(Color::DarkGray),
        )));
    }

    f.render_widget(
        Paragraph::new(lines).block(panel_block(app, DashboardPanel::Courses)),
        area,
    );
}

fn render_tasks_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.active_panel == DashboardPanel::Tasks;

    let mut lines = Vec::new();
    for (index, task) in app.tasks.iter().enumerate() {
        let selected = focused && index == app.selected_task_index;
        lines.extend(task_lines(task, selected));
    }
    if lines.is_empty() {
        lines.push(TextLine::from(Span::styled(
            "Nothing due",
            Style::default().fg(Color::DarkGray),
        )));
    }

    f.render_widget(
        Paragraph::new(lines).block(panel_block(app, DashboardPanel::Tasks)),
        area,
    );
}

fn render_clubs_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.active_panel == DashboardPanel::Clubs;

    let mut lines = Vec::new();
    for (index, club) in app.clubs.iter().enumerate() {
        let selected = focused && index == app.selected_club_index;
        lines.extend(club_lines(club, selected));
    }

    f.render_widget(
        Paragraph::new(lines).block(panel_block(app, DashboardPanel::Clubs)),
        area,
    );
}

fn render_activities_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let focused = app.active_panel == DashboardPanel::Activities;

    let mut lines = Vec::new();
    for (index, activity) in app.activities.iter().enumerate() {
        let selected = focused && index == app.selected_activity_index;
        lines.extend(activity_lines(activity, selected));
    }

    f.render_widget(
        Paragraph::new(lines).block(panel_block(app, DashboardPanel::Activities)),
        area,
    );
}

fn render_skills_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut lines = Vec::new();
    for skill in &app.skills {
        lines.extend(skill_lines(skill));
    }

    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title("Skill Development")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        ),
        area,
    );
}
