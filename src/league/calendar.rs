use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::category::Category;
use crate::models::fixture::Fixture;

/// Fixture listing for the calendar page, with an optional team filter.
#[derive(Debug)]
pub struct CalendarService {
    pool: PgPool,
}

impl CalendarService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All fixtures for a category ordered by date then kickoff time, with
    /// undated fixtures last. The team filter matches home or away.
    pub async fn get_fixtures(
        &self,
        category: Category,
        team: Option<&str>,
    ) -> Result<Vec<Fixture>, sqlx::Error> {
        sqlx::query_as::<_, Fixture>(
            "SELECT * FROM fixtures \
             WHERE category = $1 \
               AND ($2::text IS NULL OR squadra_casa = $2 OR squadra_trasferta = $2) \
             ORDER BY data ASC NULLS LAST, ora ASC NULLS LAST",
        )
        .bind(category)
        .bind(team)
        .fetch_all(&self.pool)
        .await
    }

    /// Team names for the filter dropdown, taken from the standings table.
    pub async fn get_teams(&self, category: Category) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT squadra FROM standings WHERE category = $1 ORDER BY squadra ASC",
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
    }
}

/// Id of the next fixture still to be played: the earliest-dated undecided
/// fixture on or after `today`. Undated fixtures never qualify.
pub fn next_fixture_id(fixtures: &[Fixture], today: NaiveDate) -> Option<i64> {
    fixtures
        .iter()
        .filter(|f| f.risultato.is_none())
        .filter(|f| f.data.is_some_and(|d| d >= today))
        .min_by_key(|f| (f.data, f.ora))
        .map(|f| f.id)
}
