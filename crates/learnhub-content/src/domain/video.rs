//! Video Entity
//!
//! Leaf of the hierarchy: one lesson recording inside a topic.

use serde::{Deserialize, Serialize};
use super::entity::{de, Entity};

/// A video row as stored by the backend
///
/// Duration, thumbnail and completion are optional columns; most rows
/// leave them empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "de::text")]
    pub description: String,
    #[serde(default, deserialize_with = "de::text")]
    pub url: String,
    #[serde(deserialize_with = "de::id")]
    pub topic_id: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl Video {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
        topic_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            url: url.into(),
            topic_id: topic_id.into(),
            duration: None,
            thumbnail: None,
            completed: None,
        }
    }
}

impl Entity for Video {
    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> &str {
        &self.title
    }
}

/// A video ready to render, every display field settled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub topic_id: String,
    /// "m:ss"
    pub duration: String,
    pub thumbnail: String,
    pub completed: bool,
    /// 1-based position in the topic ("Lesson #n")
    pub lesson: usize,
}

impl Entity for VideoEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_select_star_row() {
        let json = r#"{
            "id": "v-1",
            "title": "Limits",
            "description": "Approaching a value",
            "url": "https://cdn.example/limits.mp4",
            "topic_id": 12,
            "created_at": "2024-03-01T10:00:00Z"
        }"#;
        let video: Video = serde_json::from_str(json).unwrap();
        assert_eq!(video.topic_id, "12");
        assert!(video.duration.is_none());
        assert!(video.completed.is_none());
        assert_eq!(video.sort_key(), "Limits");
    }
}
