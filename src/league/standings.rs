use sqlx::PgPool;

use crate::models::category::Category;
use crate::models::standings::{ScorerRow, ScorersResponse, StandingRow, StandingsResponse};

/// Read-only access to the league standings and top-scorers tables. Both
/// are produced by the external scoring process; this service only orders
/// and returns them.
#[derive(Debug)]
pub struct StandingsService {
    pool: PgPool,
}

impl StandingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_standings(&self, category: Category) -> Result<StandingsResponse, sqlx::Error> {
        let standings = sqlx::query_as::<_, StandingRow>(
            "SELECT * FROM standings WHERE category = $1 ORDER BY posizione ASC",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        let last_update = standings.iter().map(|row| row.last_update).max();

        Ok(StandingsResponse {
            standings,
            last_update,
        })
    }

    pub async fn get_scorers(&self, category: Category) -> Result<ScorersResponse, sqlx::Error> {
        let scorers = sqlx::query_as::<_, ScorerRow>(
            "SELECT * FROM scorers WHERE category = $1 ORDER BY posizione ASC",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        let last_update = scorers.iter().map(|row| row.last_update).max();

        Ok(ScorersResponse {
            scorers,
            last_update,
        })
    }
}
