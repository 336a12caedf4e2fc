use std::time::Duration;

use crate::api::models::{
    Activity, Club, CourseDetail, CourseSummary, CurrentUserRank, LeaderboardEntry,
    LeaderboardSnapshot, PendingTask, RoadmapStep, Skill, UserProfile,
};
use crate::api::ApiError;
use crate::domain::TaskKind;

// Simulated network latencies, one per endpoint.
const COURSES_DELAY: Duration = Duration::from_millis(500);
const CLUBS_DELAY: Duration = Duration::from_millis(300);
const ACTIVITIES_DELAY: Duration = Duration::from_millis(300);
const LEADERBOARD_DELAY: Duration = Duration::from_millis(400);
const TASKS_DELAY: Duration = Duration::from_millis(350);

/// The signed-in student. Served without delay.
pub async fn load_user() -> Result<UserProfile, ApiError> {
    Ok(UserProfile {
        id: 1,
        name: "Alex Johnson".to_string(),
        email: "alex.johnson@university.edu".to_string(),
        avatar_url: "https://via.placeholder.com/40/8B5CF6/FFFFFF?text=AJ".to_string(),
        xp: 2450,
        level: 12,
        streak_days: 7,
        rank: 3,
    })
}

pub async fn load_courses() -> Result<Vec<CourseSummary>, ApiError> {
    tokio::time::sleep(COURSES_DELAY).await;

    Ok(vec![
        course(1, "Data Structures", "Dr. Smith", 75, "Monthly"),
        course(2, "Web Development", "Prof. Johnson", 60, "Assignments"),
        course(3, "Machine Learning", "Dr. Williams", 30, "Learnings"),
    ])
}

/// Static roadmap lookup. Unknown course ids yield an empty roadmap.
pub fn roadmap_for(course_id: i32) -> Vec<RoadmapStep> {
    match course_id {
        1 => vec![
            step("Introduction", "Basic concepts", true),
            step("Arrays & Lists", "Linear structures", true),
            step("Trees", "Hierarchical structures", false),
            step("Graphs", "Graph algorithms", false),
        ],
        2 => vec![
            step("HTML & CSS", "Web basics", true),
            step("JavaScript", "Programming", true),
            step("React", "Framework", false),
            step("Backend", "Server-side", false),
        ],
        3 => vec![
            step("ML Basics", "Fundamentals", true),
            step("Supervised Learning", "Classification", false),
            step("Neural Networks", "Deep learning", false),
            step("Projects", "Real applications", false),
        ],
        _ => Vec::new(),
    }
}

pub async fn load_clubs() -> Result<Vec<Club>, ApiError> {
    tokio::time::sleep(CLUBS_DELAY).await;

    Ok(vec![
        Club {
            id: 1,
            name: "Tech Club".to_string(),
            description: "Programming enthusiasts".to_string(),
            icon: "tech".to_string(),
            next_event: "Hackathon 2024".to_string(),
        },
        Club {
            id: 2,
            name: "Rotaract Club".to_string(),
            description: "Community service".to_string(),
            icon: "rotaract".to_string(),
            next_event: "Blood Drive".to_string(),
        },
        Club {
            id: 3,
            name: "Cultural Club".to_string(),
            description: "Arts and culture".to_string(),
            icon: "cultural".to_string(),
            next_event: "Cultural Fest".to_string(),
        },
    ])
}

pub async fn load_activities() -> Result<Vec<Activity>, ApiError> {
    tokio::time::sleep(ACTIVITIES_DELAY).await;

    Ok(vec![
        Activity {
            id: 1,
            name: "Dance".to_string(),
            description: "Various dance forms".to_string(),
            icon: "dance".to_string(),
            next_event: "Dance Competition".to_string(),
        },
        Activity {
            id: 2,
            name: "Music".to_string(),
            description: "Instrumental music".to_string(),
            icon: "music".to_string(),
            next_event: "Music Concert".to_string(),
        },
        Activity {
            id: 3,
            name: "Sports".to_string(),
            description: "Athletics".to_string(),
            icon: "sports".to_string(),
            next_event: "Tournament".to_string(),
        },
    ])
}

/// The skill-development catalog is fully static and served synchronously.
pub fn skills_catalog() -> Vec<Skill> {
    vec![
        skill("communication", "Communication", "Verbal skills"),
        skill("aptitude", "Aptitude", "Logic tests"),
        skill("interview", "Interviews", "Mock practice"),
    ]
}

pub async fn load_leaderboard() -> Result<LeaderboardSnapshot, ApiError> {
    tokio::time::sleep(LEADERBOARD_DELAY).await;

    Ok(LeaderboardSnapshot {
        weekly: vec![
            entry(1, "Sarah Chen", "CS", 1250, "+50"),
            entry(2, "David Kim", "CS", 1180, "+30"),
            entry(3, "Alex Johnson", "CS", 1150, "+25"),
            entry(4, "Emma Wilson", "CS", 1100, "+20"),
            entry(5, "Mike Rodriguez", "CS", 1050, "+15"),
        ],
        monthly: vec![
            entry(1, "Sarah Chen", "CS", 4200, "+200"),
            entry(2, "Lisa Wang", "ENG", 4100, "+180"),
            entry(3, "David Kim", "CS", 4050, "+150"),
            entry(4, "Alex Johnson", "CS", 3950, "+120"),
            entry(5, "John Smith", "MATH", 3900, "+100"),
        ],
        current_user: CurrentUserRank {
            rank: 3,
            name: "Alex Johnson".to_string(),
            department: "CS".to_string(),
            points: 1150,
        },
    })
}

pub async fn load_pending_tasks() -> Result<Vec<PendingTask>, ApiError> {
    tokio::time::sleep(TASKS_DELAY).await;

    Ok(vec![
        PendingTask {
            id: 1,
            title: "Data Structures Quiz".to_string(),
            kind: TaskKind::Quiz,
            course: "Data Structures".to_string(),
            due_date: "2024-01-15".to_string(),
            urgent: true,
        },
        PendingTask {
            id: 2,
            title: "React Assignment".to_string(),
            kind: TaskKind::Assignment,
            course: "Web Development".to_string(),
            due_date: "2024-01-18".to_string(),
            urgent: false,
        },
        PendingTask {
            id: 3,
            title: "ML Project".to_string(),
            kind: TaskKind::Assignment,
            course: "Machine Learning".to_string(),
            due_date: "2024-01-20".to_string(),
            urgent: false,
        },
    ])
}

/// Full course record for the detail view. Unknown ids are an error rather
/// than a fallback so the UI can say the course does not exist.
pub async fn load_course_detail(course_id: i32) -> Result<CourseDetail, ApiError> {
    match course_id {
        1 => Ok(detail(
            1,
            "Data Structures & Algorithms",
            "Dr. Smith",
            "Comprehensive course on fundamental data structures and algorithms",
            75,
            12,
            9,
        )),
        2 => Ok(detail(
            2,
            "Web Development",
            "Prof. Johnson",
            "Full-stack web development using modern technologies",
            60,
            15,
            9,
        )),
        3 => Ok(detail(
            3,
            "Machine Learning",
            "Dr. Williams",
            "Introduction to machine learning concepts and applications",
            30,
            10,
            3,
        )),
        other => Err(ApiError::CourseNotFound(other)),
    }
}

fn course(id: i32, name: &str, instructor: &str, progress: u8, category: &str) -> CourseSummary {
    CourseSummary {
        id,
        name: name.to_string(),
        instructor: instructor.to_string(),
        progress,
        category: category.to_string(),
    }
}

fn step(title: &str, description: &str, completed: bool) -> RoadmapStep {
    RoadmapStep {
        title: title.to_string(),
        description: description.to_string(),
        completed,
    }
}

fn skill(kind: &str, name: &str, description: &str) -> Skill {
    Skill {
        kind: kind.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn entry(rank: u32, name: &str, department: &str, points: u32, change: &str) -> LeaderboardEntry {
    LeaderboardEntry {
        rank,
        name: name.to_string(),
        department: department.to_string(),
        points,
        change: change.to_string(),
    }
}

fn detail(
    id: i32,
    name: &str,
    instructor: &str,
    description: &str,
    progress: u8,
    modules: u32,
    completed_modules: u32,
) -> CourseDetail {
    CourseDetail {
        id,
        name: name.to_string(),
        instructor: instructor.to_string(),
        description: description.to_string(),
        progress,
        modules,
        completed_modules,
    }
}
