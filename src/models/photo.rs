use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Where a photo appears on the invitation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PhotoSection {
    Story,
    Gallery,
}

impl PhotoSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoSection::Story => "story",
            PhotoSection::Gallery => "gallery",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "story" => Some(PhotoSection::Story),
            "gallery" => Some(PhotoSection::Gallery),
            _ => None,
        }
    }
}

impl fmt::Display for PhotoSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PhotoSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown photo section: {s}"))
    }
}

/// One uploaded photo with its public URL and display position.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: Uuid,
    pub section: PhotoSection,
    /// Public URL of the stored binary.
    pub src: String,
    pub caption: Option<String>,
    pub description: Option<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

/// Metadata for a photo whose binary has already been stored.
#[derive(Debug, Clone)]
pub struct PhotoCreate {
    pub section: PhotoSection,
    pub src: String,
    pub caption: Option<String>,
    pub description: Option<String>,
    pub order_index: i32,
}

/// The two editable text slots on a photo card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoTextField {
    Caption,
    Description,
}

impl PhotoTextField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoTextField::Caption => "caption",
            PhotoTextField::Description => "description",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "caption" => Some(PhotoTextField::Caption),
            "description" => Some(PhotoTextField::Description),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_round_trips_through_str() {
        for section in [PhotoSection::Story, PhotoSection::Gallery] {
            assert_eq!(PhotoSection::parse(section.as_str()), Some(section));
        }
        assert_eq!(PhotoSection::parse("banner"), None);
        assert!("banner".parse::<PhotoSection>().is_err());
    }

    #[test]
    fn text_field_parses_known_names_only() {
        assert_eq!(PhotoTextField::parse("caption"), Some(PhotoTextField::Caption));
        assert_eq!(
            PhotoTextField::parse("description"),
            Some(PhotoTextField::Description)
        );
        assert_eq!(PhotoTextField::parse("src"), None);
    }
}
