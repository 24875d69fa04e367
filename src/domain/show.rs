use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeType {
    Gold,
    Special,
}

impl BadgeType {
    /// Maps a stored tag onto a badge type. Unknown tags count as unset.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "gold" => Some(Self::Gold),
            "special" => Some(Self::Special),
            _ => None,
        }
    }
}

/// One scheduled show as read from the document store.
///
/// `date` stays in its canonical textual form; the schedule pipeline parses
/// it at the stage that first needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: String,
    pub date: String,
    pub band_name: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge_type: Option<BadgeType>,
}

impl Show {
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        band_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            band_name: band_name.into(),
            time: String::new(),
            cover: String::new(),
            badge: None,
            badge_type: None,
        }
    }

    #[must_use]
    pub fn with_details(mut self, time: impl Into<String>, cover: impl Into<String>) -> Self {
        self.time = time.into();
        self.cover = cover.into();
        self
    }

    #[must_use]
    pub fn with_badge(mut self, badge: impl Into<String>, badge_type: Option<BadgeType>) -> Self {
        self.badge = Some(badge.into());
        self.badge_type = badge_type;
        self
    }

    #[must_use]
    pub fn with_badge_type(mut self, badge_type: BadgeType) -> Self {
        self.badge_type = Some(badge_type);
        self
    }

    /// Badge text, treating an empty label as no badge.
    pub fn badge_text(&self) -> Option<&str> {
        self.badge.as_deref().filter(|text| !text.trim().is_empty())
    }
}
