use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::category::Category;

/// One team's row in the standings table for a category. League counters and
/// cup counters live side by side; the cup columns stay NULL until the
/// external scoring process publishes the group stage.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct StandingRow {
    pub id: i64,
    pub category: Category,
    pub posizione: i32,
    pub squadra: String,
    pub punti: Option<i32>,
    pub giocate: Option<i32>,
    pub vittorie: Option<i32>,
    pub pareggi: Option<i32>,
    pub sconfitte: Option<i32>,
    pub reti_fatte: Option<i32>,
    pub reti_subite: Option<i32>,
    pub ammonizioni: Option<i32>,
    pub espulsioni: Option<i32>,
    pub serie: Option<String>,
    pub girone: Option<String>,
    pub posizione_coppa: Option<i32>,
    pub punti_coppa: Option<i32>,
    pub giocate_coppa: Option<i32>,
    pub vittorie_coppa: Option<i32>,
    pub pareggi_coppa: Option<i32>,
    pub sconfitte_coppa: Option<i32>,
    pub reti_fatte_coppa: Option<i32>,
    pub reti_subite_coppa: Option<i32>,
    pub ammonizioni_coppa: Option<i32>,
    pub espulsioni_coppa: Option<i32>,
    pub last_update: DateTime<Utc>,
}

impl Default for StandingRow {
    fn default() -> Self {
        Self {
            id: 0,
            category: Category::Calcio5,
            posizione: 0,
            squadra: String::new(),
            punti: None,
            giocate: None,
            vittorie: None,
            pareggi: None,
            sconfitte: None,
            reti_fatte: None,
            reti_subite: None,
            ammonizioni: None,
            espulsioni: None,
            serie: None,
            girone: None,
            posizione_coppa: None,
            punti_coppa: None,
            giocate_coppa: None,
            vittorie_coppa: None,
            pareggi_coppa: None,
            sconfitte_coppa: None,
            reti_fatte_coppa: None,
            reti_subite_coppa: None,
            ammonizioni_coppa: None,
            espulsioni_coppa: None,
            last_update: DateTime::<Utc>::MIN_UTC,
        }
    }
}

/// Top-scorers row, mirroring the capocannonieri listing.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct ScorerRow {
    pub id: i64,
    pub category: Category,
    pub posizione: i32,
    pub giocatore: String,
    pub squadra: String,
    pub serie: Option<String>,
    pub gol: Option<i32>,
    pub assist: Option<i32>,
    pub ammonizioni: Option<i32>,
    pub espulsioni: Option<i32>,
    pub last_update: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub standings: Vec<StandingRow>,
    pub last_update: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScorersResponse {
    pub scorers: Vec<ScorerRow>,
    pub last_update: Option<DateTime<Utc>>,
}
