//! Click tracking and trending aggregation.

use sqlx::SqlitePool;

use crate::models::TrendingTool;
use crate::Result;

/// Default number of entries returned by [`trending`].
pub const DEFAULT_TRENDING_LIMIT: i64 = 20;

/// Largest allowed trending limit.
pub const MAX_TRENDING_LIMIT: i64 = 50;

/// Default rolling window, in days.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Largest allowed rolling window, in days.
pub const MAX_WINDOW_DAYS: i64 = 30;

/// Append one click event. No deduplication: repeat clicks all count.
pub async fn record_click(
    pool: &SqlitePool,
    tool_id: &str,
    tool_name: &str,
    tool_url: Option<&str>,
    category: Option<&str>,
    actor_hash: &str,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO tool_clicks (tool_id, tool_name, tool_url, category, actor_hash)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(tool_id)
    .bind(tool_name)
    .bind(tool_url)
    .bind(category)
    .bind(actor_hash)
    .execute(pool)
    .await?;

    Ok(())
}

/// Rank tools by click count over a rolling window.
///
/// Display fields come from the most recent click per tool. Ties on click
/// count order by most recent click time, so the ranking is deterministic.
/// `limit` is clamped to 1..=50 and `days_back` to 1..=30.
pub async fn trending(
    pool: &SqlitePool,
    limit: i64,
    days_back: i64,
) -> Result<Vec<TrendingTool>> {
    let limit = limit.clamp(1, MAX_TRENDING_LIMIT);
    let days_back = days_back.clamp(1, MAX_WINDOW_DAYS);
    let modifier = format!("-{} days", days_back);

    let rows = sqlx::query_as::<_, TrendingTool>(
        r#"
        SELECT tool_id, tool_name, tool_url, category,
               COUNT(*) AS click_count,
               MAX(clicked_at) AS last_clicked_at
        FROM tool_clicks
        WHERE clicked_at >= datetime('now', ?)
        GROUP BY tool_id
        ORDER BY click_count DESC, last_clicked_at DESC
        LIMIT ?
        "#,
    )
    .bind(modifier)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
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

    /// Insert a click with an explicit timestamp offset, e.g. "-10 days".
    async fn record_click_at(pool: &SqlitePool, tool_id: &str, tool_name: &str, offset: &str) {
        sqlx::query(
            r#"
            INSERT INTO tool_clicks (tool_id, tool_name, actor_hash, clicked_at)
            VALUES (?, ?, 'actor-test', datetime('now', ?))
            "#,
        )
        .bind(tool_id)
        .bind(tool_name)
        .bind(offset)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_trending_counts_and_orders() {
        let db = test_db().await;
        let pool = db.pool();

        for _ in 0..3 {
            record_click(pool, "t1", "Tool One", None, None, "actor-a")
                .await
                .unwrap();
        }
        record_click(pool, "t2", "Tool Two", None, None, "actor-a")
            .await
            .unwrap();

        let ranked = trending(pool, 20, 7).await.unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].tool_id, "t1");
        assert_eq!(ranked[0].click_count, 3);
        assert_eq!(ranked[1].tool_id, "t2");
        assert_eq!(ranked[1].click_count, 1);
    }

    #[tokio::test]
    async fn test_trending_excludes_old_clicks() {
        let db = test_db().await;
        let pool = db.pool();

        record_click_at(pool, "stale", "Stale Tool", "-10 days").await;
        record_click(pool, "fresh", "Fresh Tool", None, None, "actor-a")
            .await
            .unwrap();

        let ranked = trending(pool, 20, 7).await.unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].tool_id, "fresh");

        // A wider window picks the stale tool back up
        let ranked = trending(pool, 20, 30).await.unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[tokio::test]
    async fn test_trending_respects_limit() {
        let db = test_db().await;
        let pool = db.pool();

        for i in 0..5 {
            let tool_id = format!("t{}", i);
            record_click(pool, &tool_id, "Tool", None, None, "actor-a")
                .await
                .unwrap();
        }

        let ranked = trending(pool, 2, 7).await.unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[tokio::test]
    async fn test_trending_ties_break_by_recency() {
        let db = test_db().await;
        let pool = db.pool();

        record_click_at(pool, "older", "Older Tool", "-2 days").await;
        record_click_at(pool, "newer", "Newer Tool", "-1 days").await;

        let ranked = trending(pool, 20, 7).await.unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].click_count, ranked[1].click_count);
        assert_eq!(ranked[0].tool_id, "newer");
    }

    #[tokio::test]
    async fn test_trending_carries_latest_display_fields() {
        let db = test_db().await;
        let pool = db.pool();

        record_click_at(pool, "t1", "Old Name", "-2 days").await;
        record_click(pool, "t1", "New Name", Some("https://t1.ai"), None, "actor-a")
            .await
            .unwrap();

        let ranked = trending(pool, 20, 7).await.unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].tool_name, "New Name");
        assert_eq!(ranked[0].click_count, 2);
    }
}
