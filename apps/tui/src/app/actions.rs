use crate::config::init_app_config;
use crate::db::{create_database_pool, queries};
use color_eyre::Result;
use sqlx::SqlitePool;

/// Service layer between the app state and its surroundings: the settings
/// store and the configured backend endpoint. Without a pool the app keeps
/// running, it just stops persisting preferences.
#[derive(Debug)]
pub struct AppActions {
    pub db_pool: Option<SqlitePool>,
    pub api_base_url: String,
}

impl AppActions {
    pub fn new() -> Self {
        Self {
            db_pool: None,
            api_base_url: String::new(),
        }
    }

    pub async fn initialize(&mut self) -> Result<()> {
        let (_, api_base_url) = init_app_config()?;
        self.api_base_url = api_base_url;
        self.db_pool = Some(create_database_pool().await?);

        Ok(())
    }

    pub async fn sidebar_collapsed(&self) -> Result<bool> {
        match &self.db_pool {
            Some(pool) => queries::sidebar_collapsed(pool).await.map_err(Into::into),
            None => Ok(false),
        }
    }

    pub async fn persist_sidebar_collapsed(&self, collapsed: bool) -> Result<()> {
        if let Some(pool) = &self.db_pool {
            queries::set_sidebar_collapsed(pool, collapsed).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::setup_database;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn actions_with_memory_store() -> Result<AppActions, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect("sqlite::memory:")
            .await?;
        setup_database(&pool).await?;

        Ok(AppActions {
            db_pool: Some(pool),
            api_base_url: String::new(),
        })
    }

    #[tokio::test]
    async fn sidebar_preference_round_trips_through_the_store(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let actions = actions_with_memory_store().await?;

        assert!(!actions.sidebar_collapsed().await?);

        actions.persist_sidebar_collapsed(true).await?;
        assert!(actions.sidebar_collapsed().await?);

        actions.persist_sidebar_collapsed(false).await?;
        assert!(!actions.sidebar_collapsed().await?);

        Ok(())
    }

    #[tokio::test]
    async fn missing_store_degrades_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let actions = AppActions::new();

        assert!(!actions.sidebar_collapsed().await?);
        actions.persist_sidebar_collapsed(true).await?;
        assert!(!actions.sidebar_collapsed().await?);

        Ok(())
    }
}
