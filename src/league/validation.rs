use chrono::{Datelike, Utc};

use crate::models::cup::ChampionRequest;
use crate::models::fixture::FixtureResultRequest;

const MAX_SCORE: i32 = 99;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("scores must be non-negative")]
    NegativeScore,
    #[error("score {0} exceeds the maximum of {MAX_SCORE}")]
    ScoreTooLarge(i32),
    #[error("team name cannot be empty")]
    EmptyTeamName,
    #[error("year {0} is outside the accepted range")]
    YearOutOfRange(i32),
}

/// Input validation for the admin write surface.
pub struct AdminValidator;

impl AdminValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_result(&self, request: &FixtureResultRequest) -> Result<(), ValidationError> {
        for score in [request.home_score, request.away_score] {
            if score < 0 {
                return Err(ValidationError::NegativeScore);
            }
            if score > MAX_SCORE {
                return Err(ValidationError::ScoreTooLarge(score));
            }
        }
        Ok(())
    }

    pub fn validate_champion(&self, request: &ChampionRequest) -> Result<(), ValidationError> {
        if request.squadra.trim().is_empty() {
            return Err(ValidationError::EmptyTeamName);
        }
        // First edition of the tournament was 2020; allow one year ahead
        // for a final played across New Year.
        let current_year = Utc::now().year();
        if request.anno < 2020 || request.anno > current_year + 1 {
            return Err(ValidationError::YearOutOfRange(request.anno));
        }
        Ok(())
    }
}

impl Default for AdminValidator {
    fn default() -> Self {
        Self::new()
    }
}
