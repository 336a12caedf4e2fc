use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "sagalearn-tui", version, about = "SagaLearn student dashboard TUI")]
pub struct CliArgs {
    /// Print a dashboard summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override database path
    #[arg(long, value_name = "PATH")]
    pub db: Option<String>,
}

impl CliArgs {
    /// Flags beat environment variables; the config layer only reads env,
    /// so overrides are applied there before anything consults it.
    pub fn apply_env_overrides(&self) {
        if let Some(db) = &self.db {
            std::env::set_var("DATABASE_NAME", db);
        }
    }
}
