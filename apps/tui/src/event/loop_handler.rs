use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::{Duration, Instant};

use crate::api::{format_due_date, Achievement};
use crate::app::{handle_input, App};
use crate::domain::ToastKind;
use crate::ui;
use crate::ui::widgets::tables::leaderboard_rows;

// Configure event poll timeout (ms)
const EVENT_POLL_TIMEOUT: u64 = 50;

/// The dashboard data is refreshed unconditionally on this interval.
const REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

// First-session demo notifications.
const WELCOME_TOAST_DELAY: Duration = Duration::from_secs(1);
const DEMO_ACHIEVEMENT_DELAY: Duration = Duration::from_secs(5);

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Paint one frame so the loading state is visible while the initial
    // loads run; everything is fetched jointly before the panels fill in.
    app.loading = true;
    terminal
        .draw(|f| ui::ui(app, f))
        .map_err(|e| eyre!("Terminal draw error: {e}"))?;
    app.reload_dashboard().await;

    let started = Instant::now();
    let mut welcome_pending = true;
    let mut achievement_pending = true;
    let mut last_refresh = Instant::now();

    loop {
        // Drop overlays whose deadline has passed
        app.update();

        if welcome_pending && started.elapsed() >= WELCOME_TOAST_DELAY {
            app.show_toast("Welcome to SagaLearn! 🎓", ToastKind::Success);
            welcome_pending = false;
        }

        if achievement_pending && started.elapsed() >= DEMO_ACHIEVEMENT_DELAY {
            app.show_achievement(Achievement::first_login());
            achievement_pending = false;
        }

        if last_refresh.elapsed() >= REFRESH_INTERVAL {
            tracing::debug!("running periodic dashboard refresh");
            app.refresh_in_background().await;
            last_refresh = Instant::now();
        }

        // Draw the UI with better error context
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        // Handle events with improved error context
        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code).await?;
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }
    }
    Ok(())
}

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    app.reload_dashboard().await;

    let summary = build_headless_summary(app)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_headless_summary(&summary);
    }

    Ok(())
}

fn print_headless_summary(summary: &HeadlessSummary) {
    println!("\nSagaLearn Dashboard");
    println!("===================");
    println!(
        "{} | Level {} | {} XP | {} day streak | Rank #{}",
        summary.user.name,
        summary.user.level,
        summary.user.xp,
        summary.user.streak_days,
        summary.user.rank
    );

    println!("\nCourses:");
    for course in &summary.courses {
        println!(
            "- {} ({}) | {}% complete",
            course.name, course.instructor, course.progress
        );
    }

    println!("\nPending Tasks:");
    for task in &summary.pending_tasks {
        let urgent = if task.urgent { " [URGENT]" } else { "" };
        println!(
            "- {} | {} | due {}{}",
            task.title, task.course, task.due, urgent
        );
    }

    println!("\nLeaderboard ({}):", summary.leaderboard_period);
    for row in &summary.leaderboard {
        let marker = if row.is_current_user { " <- you" } else { "" };
        println!(
            "{:>2}. {} ({}) | {} pts {}{}",
            row.rank, row.name, row.department, row.points, row.change, marker
        );
    }
}

fn build_headless_summary(app: &App) -> Result<HeadlessSummary> {
    let user = app
        .user
        .as_ref()
        .ok_or_else(|| eyre!("user profile missing after load"))?;
    let snapshot = app
        .leaderboard
        .as_ref()
        .ok_or_else(|| eyre!("leaderboard missing after load"))?;

    let courses = app
        .courses
        .iter()
        .map(|course| HeadlessCourse {
            name: course.name.clone(),
            instructor: course.instructor.clone(),
            progress: course.progress,
        })
        .collect();

    let pending_tasks = app
        .tasks
        .iter()
        .map(|task| HeadlessTask {
            title: task.title.clone(),
            kind: task.kind.label().to_string(),
            course: task.course.clone(),
            due: format_due_date(&task.due_date),
            urgent: task.urgent,
        })
        .collect();

    let leaderboard = leaderboard_rows(snapshot, app.leaderboard_period)
        .into_iter()
        .map(|row| HeadlessRank {
            rank: row.rank,
            name: row.name,
            department: row.department,
            points: row.points,
            change: row.change,
            is_current_user: row.is_current_user,
        })
        .collect();

    Ok(HeadlessSummary {
        user: HeadlessUser {
            name: user.name.clone(),
            level: user.level,
            xp: user.xp,
            streak_days: user.streak_days,
            rank: user.rank,
        },
        courses,
        pending_tasks,
        leaderboard_period: app.leaderboard_period.as_str().to_string(),
        leaderboard,
    })
}

#[derive(serde::Serialize)]
struct HeadlessSummary {
    user: HeadlessUser,
    courses: Vec<HeadlessCourse>,
    pending_tasks: Vec<HeadlessTask>,
    leaderboard_period: String,
    leaderboard: Vec<HeadlessRank>,
}

#[derive(serde::Serialize)]
struct HeadlessUser {
    name: String,
    level: u32,
    xp: u32,
    streak_days: u32,
    rank: u32,
}

#[derive(serde::Serialize)]
struct HeadlessCourse {
    name: String,
    instructor: String,
    progress: u8,
}

#[derive(serde::Serialize)]
struct HeadlessTask {
    title: String,
    kind: String,
    course: String,
    due: String,
    urgent: bool,
}

#[derive(serde::Serialize)]
struct HeadlessRank {
    rank: u32,
    name: String,
    department: String,
    points: u32,
    change: String,
    is_current_user: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn headless_summary_reflects_the_fixtures() -> Result<()> {
        let mut app = App::new();
        app.reload_dashboard().await;

        let summary = build_headless_summary(&app)?;

        assert_eq!(summary.user.name, "Alex Johnson");
        assert_eq!(summary.courses.len(), 3);
        assert_eq!(summary.pending_tasks.len(), 3);
        assert_eq!(summary.leaderboard_period, "weekly");
        assert_eq!(summary.leaderboard.len(), 5);
        assert!(summary.pending_tasks[0].urgent);
        assert_eq!(summary.pending_tasks[0].due, "Jan 15");

        Ok(())
    }

    #[tokio::test]
    async fn headless_summary_serializes_to_json() -> Result<()> {
        let mut app = App::new();
        app.reload_dashboard().await;

        let summary = build_headless_summary(&app)?;
        let json = serde_json::to_string_pretty(&summary)?;

        assert!(json.contains("\"Alex Johnson\""));
        assert!(json.contains("\"leaderboard_period\": \"weekly\""));

        Ok(())
    }

    #[test]
    fn summary_of_an_unloaded_app_is_an_error() {
        let app = App::new();
        assert!(build_headless_summary(&app).is_err());
    }
}
