mod config;

pub use config::{api_base_url, init_app_config};
