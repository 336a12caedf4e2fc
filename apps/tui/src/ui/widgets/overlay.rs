use crate::app::notify::{AchievementPopup, Toast};
use crate::domain::ToastKind;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const fn toast_color(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
        ToastKind::Warning => Color::Yellow,
        ToastKind::Info => Color::Cyan,
    }
}

/// Small bordered box in the bottom-right corner, colored by kind.
pub fn render_toast(toast: &Toast, f: &mut Frame<'_>) {
    let area = f.area();

    let wanted = toast.message.chars().count() + 8;
    let width = u16::try_from(wanted).unwrap_or(area.width).min(area.width);
    let height = 3;
    if area.width < width || area.height < height {
        return;
    }

    let rect = Rect {
        x: area.x + area.width - width,
        y: area.y + area.height - height,
        width,
        height,
    };

    let color = toast_color(toast.kind);
    let line = TextLine::from(vec![
        Span::styled(
            format!(" {} ", toast.kind.glyph()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(toast.message.clone()),
    ]);

    f.render_widget(ClearWidget, rect);
    f.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        ),
        rect,
    );
}

pub fn render_achievement(popup: &AchievementPopup, f: &mut Frame<'_>) {
    let rect = centered_rect(40, 30, f.area());
    if rect.width < 10 || rect.height < 5 {
        return;
    }

    let achievement = &popup.achievement;
    let lines = vec![
        TextLine::from(""),
        TextLine::from(Span::styled(
            format!("{}  {}", achievement.icon, achievement.name),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            achievement.description.clone(),
            Style::default().fg(Color::White),
        )),
        TextLine::from(Span::styled(
            format!("+{} XP", achievement.xp),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "d: dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(ClearWidget, rect);
    f.render_widget(
        Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .title(" Achievement Unlocked! ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

pub fn render_help(f: &mut Frame<'_>) {
    let rect = centered_rect(60, 70, f.area());
    if rect.width < 20 || rect.height < 8 {
        return;
    }

    let bindings = [
        ("F1", "Toggle this help"),
        ("1-4", "Dashboard / Courses / Assignments / Leaderboard"),
        ("Tab / Shift-Tab", "Cycle dashboard panels"),
        ("Up / Down", "Move selection"),
        ("Enter", "Open the selected course"),
        ("r", "Expand/collapse the selected course roadmap"),
        ("Left / Right", "Switch leaderboard period"),
        ("s", "Collapse/expand the sidebar"),
        ("d", "Dismiss the achievement popup"),
        ("Esc", "Back"),
        ("q", "Quit"),
    ];

    let mut lines = vec![TextLine::from("")];
    for (key, description) in bindings {
        lines.push(TextLine::from(vec![
            Span::styled(
                format!("  {key:<16}"),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(description),
        ]));
    }

    f.render_widget(ClearWidget, rect);
    f.render_widget(
        Paragraph::new(Text::from(lines)).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        rect,
    );
}
