pub mod assignments;
pub mod course_detail;
pub mod courses;
pub mod dashboard;
pub mod leaderboard;
