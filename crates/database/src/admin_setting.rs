//! Admin settings: a singleton key-value store.

use sqlx::SqlitePool;

use crate::Result;

/// Setting key holding the hashed moderation passkey.
///
/// First-time setup is defined as the absence of this key.
pub const ADMIN_PASSKEY_KEY: &str = "admin_passkey";

/// Get a setting value, or `None` if the key was never set.
pub async fn get_setting(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let value = sqlx::query_scalar::<_, String>(
        r#"
        SELECT setting_value
        FROM admin_settings
        WHERE setting_key = ?
        "#,
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;

    Ok(value)
}

/// Set a setting value, replacing any previous value for the key.
pub async fn set_setting(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO admin_settings (setting_key, setting_value)
        VALUES (?, ?)
        ON CONFLICT (setting_key)
        DO UPDATE SET setting_value = excluded.setting_value,
                      updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}
