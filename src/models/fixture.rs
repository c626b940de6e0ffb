use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

use crate::models::category::Category;

/// A scheduled or played match. Created and updated by the administrative
/// process; read-only for every view in this service.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Fixture {
    pub id: i64,
    pub category: Category,
    pub giornata: Option<i32>,
    pub data: Option<NaiveDate>,
    pub ora: Option<NaiveTime>,
    pub campo: Option<String>,
    pub squadra_casa: Option<String>,
    pub squadra_trasferta: Option<String>,
    /// "home-away" goals once the match has been played, e.g. "3-1".
    pub risultato: Option<String>,
    pub tipo_competizione: Option<CompetitionType>,
    pub fase_coppa: Option<CupPhase>,
    pub girone: Option<String>,
    /// 1-based position inside the round template, assigned by the
    /// scheduling process. Fixtures without one fall back to arrival order.
    pub bracket_slot: Option<i32>,
}

impl Fixture {
    pub fn is_decided(&self) -> bool {
        self.risultato.is_some()
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            id: 0,
            category: Category::Calcio5,
            giornata: None,
            data: None,
            ora: None,
            campo: None,
            squadra_casa: None,
            squadra_trasferta: None,
            risultato: None,
            tipo_competizione: None,
            fase_coppa: None,
            girone: None,
            bracket_slot: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CompetitionType {
    Campionato,
    Coppa,
}

/// The knockout round a cup fixture belongs to. `Gironi` tags cup fixtures
/// still inside the group stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CupPhase {
    Gironi,
    Quarti,
    Semifinali,
    Finale,
}

impl CupPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            CupPhase::Gironi => "gironi",
            CupPhase::Quarti => "quarti",
            CupPhase::Semifinali => "semifinali",
            CupPhase::Finale => "finale",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub category: Category,
    pub team: Option<String>,
}

impl fmt::Display for CalendarQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category: {}, team: {:?}", self.category, self.team)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub fixtures: Vec<Fixture>,
    /// Id of the filtered team's next undecided fixture, when a team filter
    /// is active.
    pub next_fixture_id: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FixtureResultRequest {
    pub home_score: i32,
    pub away_score: i32,
}
