use sqlx::FromRow;

/// A row of the settings table. Values are kept as strings; callers own the
/// interpretation ("true"/"false" for flags).
#[derive(Debug, FromRow, Clone)]
pub struct SettingRecord {
    pub key: String,
    pub value: String,
}
