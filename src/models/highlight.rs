use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

use crate::models::category::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// A gallery item. The media file itself lives on external storage; rows
/// only carry its public URL.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Highlight {
    pub id: i64,
    pub titolo: String,
    pub descrizione: Option<String>,
    pub file_path: String,
    pub file_type: MediaType,
    pub category: Option<Category>,
    pub url: String,
    pub upload_date: DateTime<Utc>,
    pub featured: bool,
    pub views: i32,
    pub likes: i32,
}

#[derive(Debug, Deserialize)]
pub struct HighlightsQuery {
    pub category: Option<Category>,
    pub file_type: Option<MediaType>,
}

impl fmt::Display for HighlightsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "category: {:?}, file_type: {:?}",
            self.category, self.file_type
        )
    }
}
