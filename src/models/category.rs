use serde::{Deserialize, Serialize};
use std::fmt;

/// The sport variant scoping every query. No cross-category relationships
/// exist anywhere in the data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Calcio5,
    Calcio7,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Calcio5 => "calcio5",
            Category::Calcio7 => "calcio7",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Category,
}

impl fmt::Display for CategoryQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category: {}", self.category)
    }
}
