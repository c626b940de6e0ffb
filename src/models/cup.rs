use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::category::Category;

/// The four fixed cup groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupLetter {
    A,
    B,
    C,
    D,
}

impl GroupLetter {
    pub const ALL: [GroupLetter; 4] = [
        GroupLetter::A,
        GroupLetter::B,
        GroupLetter::C,
        GroupLetter::D,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupLetter::A => "A",
            GroupLetter::B => "B",
            GroupLetter::C => "C",
            GroupLetter::D => "D",
        }
    }
}

/// One team inside a group table, carrying the cup counters only.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GroupEntry {
    /// Displayed rank: the upstream cup rank when present, otherwise the
    /// 1-based position in the derived ordering.
    pub position: i32,
    pub squadra: String,
    pub punti: Option<i32>,
    pub giocate: Option<i32>,
    pub vittorie: Option<i32>,
    pub pareggi: Option<i32>,
    pub sconfitte: Option<i32>,
    pub reti_fatte: Option<i32>,
    pub reti_subite: Option<i32>,
    pub qualified: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GroupTable {
    pub girone: GroupLetter,
    pub entries: Vec<GroupEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GroupStageView {
    pub groups: Vec<GroupTable>,
    /// False renders as the explicit "groups not yet published" empty state.
    pub has_data: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotState {
    Decided,
    Scheduled,
    Undetermined,
}

/// A fixed position in the bracket template, either backed by a real
/// fixture or a synthesized TBD placeholder (`fixture_id` is None).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BracketSlot {
    pub fixture_id: Option<i64>,
    pub squadra_casa: Option<String>,
    pub squadra_trasferta: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub data: Option<NaiveDate>,
    pub state: SlotState,
}

impl BracketSlot {
    pub fn placeholder() -> Self {
        Self {
            fixture_id: None,
            squadra_casa: None,
            squadra_trasferta: None,
            home_score: None,
            away_score: None,
            data: None,
            state: SlotState::Undetermined,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.fixture_id.is_none()
    }
}

/// The terminal slot of the bracket. Sourced exclusively from the champion
/// record, never from the final fixture's result.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChampionSlot {
    pub assigned: bool,
    pub squadra: Option<String>,
    pub anno: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BracketView {
    pub quarti: Vec<BracketSlot>,
    pub semifinali: Vec<BracketSlot>,
    pub finale: BracketSlot,
    pub vincitore: ChampionSlot,
    /// False renders as the "knockout stage not yet published" empty state.
    pub has_data: bool,
}

/// Champion record, written once per (category, year) when the final is
/// resolved.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct CupChampion {
    pub id: i64,
    pub category: Category,
    pub squadra: String,
    pub anno: i32,
    pub data_vittoria: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChampionRequest {
    pub category: Category,
    pub squadra: String,
    pub anno: i32,
}
