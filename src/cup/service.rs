use sqlx::PgPool;

use crate::cup::bracket;
use crate::cup::groups::{self, MissingRankPolicy};
use crate::models::category::Category;
use crate::models::cup::{BracketView, CupChampion, GroupStageView};
use crate::models::fixture::{CupPhase, Fixture};
use crate::models::standings::StandingRow;

/// Service composing the cup progression views. Every call is a fresh read:
/// no state survives between requests, so a newer request can never observe
/// a stale older fetch.
#[derive(Debug)]
pub struct CupService {
    pool: PgPool,
    missing_rank: MissingRankPolicy,
}

impl CupService {
    pub fn new(pool: PgPool, missing_rank: MissingRankPolicy) -> Self {
        Self { pool, missing_rank }
    }

    /// Group-stage view: the four fixed group tables derived from the
    /// category's standings rows.
    pub async fn group_stage(&self, category: Category) -> Result<GroupStageView, sqlx::Error> {
        let rows = sqlx::query_as::<_, StandingRow>(
            "SELECT * FROM standings WHERE category = $1 ORDER BY posizione ASC",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(groups::derive_groups(&rows, self.missing_rank))
    }

    /// Knockout view: three phase-filtered fixture reads plus the champion
    /// record for `anno`. If any sub-query fails the whole view fails; no
    /// partial bracket is ever returned.
    pub async fn bracket(&self, category: Category, anno: i32) -> Result<BracketView, sqlx::Error> {
        let quarti = self.knockout_fixtures(category, CupPhase::Quarti).await?;
        let semifinali = self
            .knockout_fixtures(category, CupPhase::Semifinali)
            .await?;
        let finale = self
            .knockout_fixtures(category, CupPhase::Finale)
            .await?
            .into_iter()
            .next();

        let champion = sqlx::query_as::<_, CupChampion>(
            "SELECT * FROM cup_champions WHERE category = $1 AND anno = $2",
        )
        .bind(category)
        .bind(anno)
        .fetch_optional(&self.pool)
        .await?;

        Ok(bracket::build_bracket(
            quarti, semifinali, finale, champion, anno,
        ))
    }

    async fn knockout_fixtures(
        &self,
        category: Category,
        fase: CupPhase,
    ) -> Result<Vec<Fixture>, sqlx::Error> {
        sqlx::query_as::<_, Fixture>(
            "SELECT * FROM fixtures \
             WHERE category = $1 AND tipo_competizione = 'coppa' AND fase_coppa = $2 \
             ORDER BY data ASC NULLS LAST, ora ASC NULLS LAST",
        )
        .bind(category)
        .bind(fase)
        .fetch_all(&self.pool)
        .await
    }
}
