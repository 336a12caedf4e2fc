use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

const DEFAULT_DATABASE_NAME: &str = "sagalearn.db";
const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Initializes the application configuration
/// Returns a tuple containing the database URL and the backend base URL
pub fn init_app_config() -> color_eyre::eyre::Result<(String, String)> {
    // Load environment variables from .env file
    dotenv().ok();

    let base_dir: PathBuf = env::current_dir()?;

    let db_name = env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());

    // Database path relative to the current directory
    let database_path = base_dir.join(&db_name);

    if let Some(parent) = database_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // No canonicalize() here, the file might not exist yet
    let path_str = database_path
        .to_str()
        .ok_or_else(|| eyre!("Invalid database path"))?
        .to_string();

    // SQLx URL format:
    // - absolute paths: sqlite:///absolute/path/to/file.db (3 slashes total)
    // - relative paths: sqlite://relative/path/to/file.db (2 slashes total)
    let clean_path = path_str.trim_start_matches('/');

    let database_url = if database_path.is_absolute() {
        format!("sqlite:///{clean_path}")
    } else {
        format!("sqlite://{clean_path}")
    };

    Ok((database_url, api_base_url()))
}

/// Base URL of the SagaLearn backend. Configured and logged at startup but
/// not contacted while the app serves fixture data.
pub fn api_base_url() -> String {
    env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}
