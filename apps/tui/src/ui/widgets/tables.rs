use crate::api::LeaderboardSnapshot;
use crate::domain::LeaderboardPeriod;

pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    selected_index
}

/// Direction of a row's point change, derived from the sign of the change
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

pub fn change_trend(change: &str) -> Trend {
    if change.starts_with('-') {
        Trend::Down
    } else if change.starts_with('+') {
        Trend::Up
    } else {
        Trend::Flat
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub name: String,
    pub department: String,
    pub points: u32,
    pub change: String,
    pub trend: Trend,
    pub is_current_user: bool,
}

/// Builds the display rows for one period. The signed-in student's own row
/// is appended only when they are not already in the visible top ranks.
/// Pure and idempotent: the same snapshot yields identical rows every call.
pub fn leaderboard_rows(
    snapshot: &LeaderboardSnapshot,
    period: LeaderboardPeriod,
) -> Vec<LeaderboardRow> {
    let entries = match period {
        LeaderboardPeriod::Weekly => &snapshot.weekly,
        LeaderboardPeriod::Monthly => &snapshot.monthly,
    };

    let mut rows: Vec<LeaderboardRow> = entries
        .iter()
        .map(|entry| LeaderboardRow {
            rank: entry.rank,
            name: entry.name.clone(),
            department: entry.department.clone(),
            points: entry.points,
            change: entry.change.clone(),
            trend: change_trend(&entry.change),
            is_current_user: entry.name == snapshot.current_user.name,
        })
        .collect();

    if !rows.iter().any(|row| row.is_current_user) {
        let user = &snapshot.current_user;
        rows.push(LeaderboardRow {
            rank: user.rank,
            name: user.name.clone(),
            department: user.department.clone(),
            points: user.points,
            change: String::new(),
            trend: Trend::Flat,
            is_current_user: true,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{self, ApiError, CurrentUserRank, LeaderboardEntry};

    fn entry(rank: u32, name: &str, points: u32, change: &str) -> LeaderboardEntry {
        LeaderboardEntry {
            rank,
            name: name.to_string(),
            department: "CS".to_string(),
            points,
            change: change.to_string(),
        }
    }

    #[test]
    fn scroll_offset_follows_the_selection() {
        assert_eq!(scroll_offset(3, 10, 2), 0);
        assert_eq!(scroll_offset(20, 10, 4), 4);
        assert_eq!(scroll_offset(20, 10, 14), 5);
    }

    #[test]
    fn trend_is_derived_from_the_change_sign() {
        assert_eq!(change_trend("+50"), Trend::Up);
        assert_eq!(change_trend("-25"), Trend::Down);
        assert_eq!(change_trend(""), Trend::Flat);
        assert_eq!(change_trend("0"), Trend::Flat);
    }

    #[tokio::test]
    async fn shipped_fixture_yields_five_rows_for_both_periods() -> Result<(), ApiError> {
        let snapshot = api::load_leaderboard().await?;

        // Alex Johnson is rank 3 weekly and rank 4 monthly, so no extra
        // current-user row is appended for either period.
        for period in LeaderboardPeriod::ALL {
            let rows = leaderboard_rows(&snapshot, period);
            assert_eq!(rows.len(), 5, "{period:?}");
            assert_eq!(
                rows.iter().filter(|row| row.is_current_user).count(),
                1,
                "{period:?}"
            );
        }

        let weekly = leaderboard_rows(&snapshot, LeaderboardPeriod::Weekly);
        assert!(weekly[2].is_current_user);

        let monthly = leaderboard_rows(&snapshot, LeaderboardPeriod::Monthly);
        assert!(monthly[3].is_current_user);

        Ok(())
    }

    #[tokio::test]
    async fn switching_periods_and_back_restores_identical_rows() -> Result<(), ApiError> {
        let snapshot = api::load_leaderboard().await?;

        let initial_weekly = leaderboard_rows(&snapshot, LeaderboardPeriod::Weekly);
        let _monthly = leaderboard_rows(&snapshot, LeaderboardPeriod::Monthly);
        let weekly_again = leaderboard_rows(&snapshot, LeaderboardPeriod::Weekly);

        assert_eq!(initial_weekly, weekly_again);
        Ok(())
    }

    #[test]
    fn current_user_outside_the_top_ranks_gets_an_extra_row() {
        let snapshot = LeaderboardSnapshot {
            weekly: vec![
                entry(1, "Sarah Chen", 1250, "+50"),
                entry(2, "David Kim", 1180, "+30"),
            ],
            monthly: Vec::new(),
            current_user: CurrentUserRank {
                rank: 17,
                name: "Alex Johnson".to_string(),
                department: "CS".to_string(),
                points: 420,
            },
        };

        let rows = leaderboard_rows(&snapshot, LeaderboardPeriod::Weekly);
        assert_eq!(rows.len(), 3);

        let last = &rows[2];
        assert!(last.is_current_user);
        assert_eq!(last.rank, 17);
        assert_eq!(last.trend, Trend::Flat);
    }

    #[test]
    fn negative_changes_are_marked_as_down() {
        let snapshot = LeaderboardSnapshot {
            weekly: vec![entry(1, "Alex Johnson", 900, "-10")],
            monthly: Vec::new(),
            current_user: CurrentUserRank {
                rank: 1,
                name: "Alex Johnson".to_string(),
                department: "CS".to_string(),
                points: 900,
            },
        };

        let rows = leaderboard_rows(&snapshot, LeaderboardPeriod::Weekly);
        assert_eq!(rows[0].trend, Trend::Down);
        assert!(rows[0].is_current_user);
    }
}
