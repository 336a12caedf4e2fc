use sqlx::{query, query_as, SqlitePool};

use crate::db::models::SettingRecord;

/// Key under which the collapsed-sidebar preference is stored.
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

pub async fn get_setting(pool: &SqlitePool, key: &str) -> Result<Option<String>, sqlx::Error> {
    let record = query_as::<_, SettingRecord>("SELECT key, value FROM settings WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    Ok(record.map(|record| record.value))
}

pub async fn set_setting(pool: &SqlitePool, key: &str, value: &str) -> Result<(), sqlx::Error> {
    query(
        "INSERT INTO settings (key, value) VALUES (?, ?) \
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}

/// Reads the sidebar preference; anything other than a stored "true" means
/// expanded, so a missing key falls back to the default.
pub async fn sidebar_collapsed(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let value = get_setting(pool, SIDEBAR_COLLAPSED_KEY).await?;
    Ok(value.as_deref() == Some("true"))
}

pub async fn set_sidebar_collapsed(pool: &SqlitePool, collapsed: bool) -> Result<(), sqlx::Error> {
    let value = if collapsed { "true" } else { "false" };
    set_setting(pool, SIDEBAR_COLLAPSED_KEY, value).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::setup_database;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_db() -> Result<SqlitePool, sqlx::Error> {
        // Use an in-memory database for testing
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect("sqlite::memory:")
            .await?;

        setup_database(&pool).await?;

        Ok(pool)
    }

    #[tokio::test]
    async fn test_setting_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let pool = setup_test_db().await?;

        assert_eq!(get_setting(&pool, "theme").await?, None);

        set_setting(&pool, "theme", "dark").await?;
        assert_eq!(get_setting(&pool, "theme").await?, Some("dark".to_string()));

        // Writing again replaces rather than duplicates.
        set_setting(&pool, "theme", "light").await?;
        assert_eq!(
            get_setting(&pool, "theme").await?,
            Some("light".to_string())
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_sidebar_defaults_to_expanded() -> Result<(), Box<dyn std::error::Error>> {
        let pool = setup_test_db().await?;

        assert!(!sidebar_collapsed(&pool).await?);

        // Garbage values are treated as the default too.
        set_setting(&pool, SIDEBAR_COLLAPSED_KEY, "maybe").await?;
        assert!(!sidebar_collapsed(&pool).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_sidebar_preference_survives_rereads() -> Result<(), Box<dyn std::error::Error>> {
        let pool = setup_test_db().await?;

        set_sidebar_collapsed(&pool, true).await?;
        assert!(sidebar_collapsed(&pool).await?);

        // A later session reading the same store sees the stored value.
        assert!(sidebar_collapsed(&pool).await?);

        set_sidebar_collapsed(&pool, false).await?;
        assert!(!sidebar_collapsed(&pool).await?);

        Ok(())
    }
}
