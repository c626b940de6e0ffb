use sqlx::PgPool;

use crate::models::category::Category;
use crate::models::highlight::{Highlight, MediaType};

/// Gallery listing plus the two engagement counters. Counter updates are
/// single-statement increments, so concurrent clicks never lose an update.
#[derive(Debug)]
pub struct HighlightsService {
    pool: PgPool,
}

impl HighlightsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Featured items first, newest first within each tier.
    pub async fn list(
        &self,
        category: Option<Category>,
        file_type: Option<MediaType>,
    ) -> Result<Vec<Highlight>, sqlx::Error> {
        sqlx::query_as::<_, Highlight>(
            "SELECT * FROM highlights \
             WHERE ($1::varchar IS NULL OR category = $1) \
               AND ($2::varchar IS NULL OR file_type = $2) \
             ORDER BY featured DESC, upload_date DESC",
        )
        .bind(category)
        .bind(file_type)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn record_view(&self, id: i64) -> Result<Option<Highlight>, sqlx::Error> {
        sqlx::query_as::<_, Highlight>(
            "UPDATE highlights SET views = views + 1 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn add_like(&self, id: i64) -> Result<Option<Highlight>, sqlx::Error> {
        sqlx::query_as::<_, Highlight>(
            "UPDATE highlights SET likes = likes + 1 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
