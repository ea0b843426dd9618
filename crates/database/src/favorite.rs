//! Per-actor favorites.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Favorite;

/// List all favorites for an actor, oldest first.
pub async fn list_favorites(pool: &SqlitePool, actor_hash: &str) -> Result<Vec<Favorite>> {
    let rows = sqlx::query_as::<_, Favorite>(
        r#"
        SELECT id, actor_hash, tool_id, tool_name, tool_url, category, created_at
        FROM favorites
        WHERE actor_hash = ?
        ORDER BY created_at, id
        "#,
    )
    .bind(actor_hash)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Add a favorite for an actor. Idempotent.
///
/// Returns `true` if the (actor, tool) pair was already favorited. The
/// existence check is backed by a unique index, so a concurrent duplicate
/// insert also reports `true` instead of failing.
pub async fn add_favorite(
    pool: &SqlitePool,
    actor_hash: &str,
    tool_id: &str,
    tool_name: &str,
    tool_url: Option<&str>,
    category: Option<&str>,
) -> Result<bool> {
    if is_favorited(pool, actor_hash, tool_id).await? {
        return Ok(true);
    }

    let result = sqlx::query(
        r#"
        INSERT INTO favorites (actor_hash, tool_id, tool_name, tool_url, category)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(actor_hash)
    .bind(tool_id)
    .bind(tool_name)
    .bind(tool_url)
    .bind(category)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(false),
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Ok(true),
        Err(e) => Err(DatabaseError::Sqlx(e)),
    }
}

/// Remove a favorite. A no-op if the pair was never favorited.
pub async fn remove_favorite(pool: &SqlitePool, actor_hash: &str, tool_id: &str) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM favorites
        WHERE actor_hash = ? AND tool_id = ?
        "#,
    )
    .bind(actor_hash)
    .bind(tool_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Check whether an actor has favorited a tool.
pub async fn is_favorited(pool: &SqlitePool, actor_hash: &str, tool_id: &str) -> Result<bool> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM favorites
        WHERE actor_hash = ? AND tool_id = ?
        "#,
    )
    .bind(actor_hash)
    .bind(tool_id)
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let db = test_db().await;

        let already = add_favorite(
            db.pool(), "actor-a", "t1", "Tool One", Some("https://one.ai"), None,
        )
        .await
        .unwrap();
        assert!(!already);

        let already = add_favorite(
            db.pool(), "actor-a", "t1", "Tool One", Some("https://one.ai"), None,
        )
        .await
        .unwrap();
        assert!(already);

        let favorites = list_favorites(db.pool(), "actor-a").await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].tool_id, "t1");
    }

    #[tokio::test]
    async fn test_actors_are_isolated() {
        let db = test_db().await;

        add_favorite(db.pool(), "actor-a", "t1", "Tool One", None, None)
            .await
            .unwrap();

        let a = list_favorites(db.pool(), "actor-a").await.unwrap();
        assert_eq!(a.len(), 1);

        let b = list_favorites(db.pool(), "actor-b").await.unwrap();
        assert!(b.is_empty());
    }

    #[tokio::test]
    async fn test_remove_missing_is_noop() {
        let db = test_db().await;

        remove_favorite(db.pool(), "actor-a", "never-added")
            .await
            .unwrap();

        add_favorite(db.pool(), "actor-a", "t1", "Tool One", None, None)
            .await
            .unwrap();
        remove_favorite(db.pool(), "actor-a", "t1").await.unwrap();

        assert!(!is_favorited(db.pool(), "actor-a", "t1").await.unwrap());
    }
}
