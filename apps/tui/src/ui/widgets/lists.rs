//! Pure item-to-lines mapping for the list panels. Nothing in here touches
//! the terminal; screens commit the lines to the frame.

use crate::api::{format_due_date, Activity, Club, CourseSummary, PendingTask, RoadmapStep, Skill};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};

/// Icon glyph for a club icon key. Unknown keys fall back to a plain dot.
pub fn club_glyph(key: &str) -> &'static str {
    match key {
        "tech" => "⌨",
        "rotaract" => "♥",
        "cultural" => "✿",
        _ => "•",
    }
}

pub fn activity_glyph(key: &str) -> &'static str {
    match key {
        "dance" => "♪",
        "music" => "♫",
        "sports" => "⚽",
        _ => "•",
    }
}

pub fn skill_glyph(kind: &str) -> &'static str {
    match kind {
        "communication" => "🗣",
        "aptitude" => "✦",
        "interview" => "🤝",
        _ => "•",
    }
}

/// Text progress bar filled proportionally to the percentage.
pub fn progress_bar(progress: u8, width: usize) -> String {
    let progress = progress.min(100);
    let filled = width * usize::from(progress) / 100;

    let mut bar = String::with_capacity(width * 3);
    for cell in 0..width {
        bar.push(if cell < filled { '█' } else { '░' });
    }
    bar
}

fn selection_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(0, 0, 238))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

/// Lines for one course entry, with its roadmap inlined when expanded.
pub fn course_lines(
    course: &CourseSummary,
    roadmap: &[RoadmapStep],
    expanded: bool,
    selected: bool,
) -> Vec<TextLine<'static>> {
    let arrow = if expanded { "▾" } else { "▸" };

    let mut lines = vec![
        TextLine::from(vec![
            Span::styled(format!("{arrow} {}", course.name), selection_style(selected)),
            Span::styled(
                format!("  [{}]", course.category),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        TextLine::from(vec![
            Span::styled(
                format!("   {}  ", course.instructor),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                progress_bar(course.progress, 10),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(
                format!(" {}%", course.progress),
                Style::default().fg(Color::Gray),
            ),
        ]),
    ];

    if expanded {
        lines.extend(roadmap_lines(roadmap));
    }

    lines
}

/// Roadmap milestones as a small timeline, completed steps checked off.
pub fn roadmap_lines(roadmap: &[RoadmapStep]) -> Vec<TextLine<'static>> {
    roadmap
        .iter()
        .map(|step| {
            let (mark, style) = if step.completed {
                ("✔", Style::default().fg(Color::Green))
            } else {
                ("○", Style::default().fg(Color::DarkGray))
            };

            TextLine::from(vec![
                Span::styled(format!("     {mark} "), style),
                Span::styled(step.title.clone(), style),
                Span::styled(
                    format!(" · {}", step.description),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect()
}

pub fn club_lines(club: &Club, selected: bool) -> Vec<TextLine<'static>> {
    group_lines(
        club_glyph(&club.icon),
        &club.name,
        &club.description,
        &club.next_event,
        selected,
    )
}

pub fn activity_lines(activity: &Activity, selected: bool) -> Vec<TextLine<'static>> {
    group_lines(
        activity_glyph(&activity.icon),
        &activity.name,
        &activity.description,
        &activity.next_event,
        selected,
    )
}

fn group_lines(
    glyph: &str,
    name: &str,
    description: &str,
    next_event: &str,
    selected: bool,
) -> Vec<TextLine<'static>> {
    vec![
        TextLine::from(vec![
            Span::raw(format!("{glyph} ")),
            Span::styled(
                name.to_string(),
                selection_style(selected).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {description}"),
                Style::default().fg(Color::Gray),
            ),
        ]),
        TextLine::from(Span::styled(
            format!("   Next: {next_event}"),
            Style::default().fg(Color::Cyan),
        )),
    ]
}

pub fn skill_lines(skill: &Skill) -> Vec<TextLine<'static>> {
    vec![
        TextLine::from(vec![
            Span::raw(format!("{} ", skill_glyph(&skill.kind))),
            Span::styled(
                skill.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        TextLine::from(Span::styled(
            format!("   {}", skill.description),
            Style::default().fg(Color::Gray),
        )),
    ]
}

pub fn task_lines(task: &PendingTask, selected: bool) -> Vec<TextLine<'static>> {
    let urgency = if task.urgent {
        Span::styled(
            "! ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("  ")
    };

    vec![
        TextLine::from(vec![
            urgency,
            Span::styled(task.title.clone(), selection_style(selected)),
        ]),
        TextLine::from(Span::styled(
            format!(
                "   [{}] {} · due {}",
                task.kind.label(),
                task.course,
                format_due_date(&task.due_date)
            ),
            Style::default().fg(Color::Gray),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;
    use crate::domain::TaskKind;

    fn course() -> CourseSummary {
        CourseSummary {
            id: 1,
            name: "Data Structures".to_string(),
            instructor: "Dr. Smith".to_string(),
            progress: 75,
            category: "Monthly".to_string(),
        }
    }

    #[test]
    fn unknown_icon_keys_fall_back_to_a_dot() {
        assert_eq!(club_glyph("tech"), "⌨");
        assert_eq!(club_glyph("chess"), "•");
        assert_eq!(activity_glyph("robotics"), "•");
        assert_eq!(skill_glyph("aptitude"), "✦");
        assert_eq!(skill_glyph(""), "•");
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0, 10), "░░░░░░░░░░");
        assert_eq!(progress_bar(50, 10), "█████░░░░░");
        assert_eq!(progress_bar(100, 10), "██████████");
        // Out-of-range input clamps instead of overflowing the bar.
        assert_eq!(progress_bar(130, 10), "██████████");
    }

    #[test]
    fn roadmap_appears_only_when_expanded() {
        let roadmap = api::roadmap_for(1);

        let collapsed = course_lines(&course(), &roadmap, false, false);
        assert_eq!(collapsed.len(), 2);

        let expanded = course_lines(&course(), &roadmap, true, false);
        assert_eq!(expanded.len(), 2 + roadmap.len());
    }

    #[test]
    fn rendering_twice_produces_identical_lines() {
        let roadmap = api::roadmap_for(1);
        let first = course_lines(&course(), &roadmap, true, true);
        let second = course_lines(&course(), &roadmap, true, true);
        assert_eq!(first, second);
    }

    #[test]
    fn urgent_tasks_carry_the_warning_marker() {
        let task = PendingTask {
            id: 1,
            title: "Data Structures Quiz".to_string(),
            kind: TaskKind::Quiz,
            course: "Data Structures".to_string(),
            due_date: "2024-01-15".to_string(),
            urgent: true,
        };

        let lines = task_lines(&task, false);
        let first_line: String = lines[0]
            .spans
            .iter()
            .map(|span| span.content.clone().into_owned())
            .collect();
        assert!(first_line.starts_with('!'));

        let second_line: String = lines[1]
            .spans
            .iter()
            .map(|span| span.content.clone().into_owned())
            .collect();
        assert!(second_line.contains("due Jan 15"));
        assert!(second_line.contains("[Quiz]"));
    }
}
