//! Topic Entity
//!
//! A topic belongs to a subject and has many videos.

use serde::{Deserialize, Serialize};
use super::entity::{de, Entity};
use super::subject::SubjectRef;

/// A topic within a subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "de::text")]
    pub description: String,
    #[serde(deserialize_with = "de::id")]
    pub subject_id: String,
}

impl Topic {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        subject_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            subject_id: subject_id.into(),
        }
    }
}

impl Entity for Topic {
    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> &str {
        &self.name
    }
}

/// A topic fetched by id, with its subject and grade lineage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDetail {
    pub topic: Topic,
    pub subject: SubjectRef,
}

/// A topic as listed under a subject; `None` = not supplied by the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRow {
    pub topic: Topic,
    pub video_count: Option<u32>,
    pub duration: Option<String>,
}

impl TopicRow {
    pub fn bare(topic: Topic) -> Self {
        Self {
            topic,
            video_count: None,
            duration: None,
        }
    }
}

/// A topic card: the topic plus its derived metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSummary {
    #[serde(flatten)]
    pub topic: Topic,
    pub video_count: u32,
    /// e.g. "2.4 hours"; placeholder unless the source supplied it
    pub duration: String,
}

impl Entity for TopicSummary {
    fn id(&self) -> &str {
        &self.topic.id
    }

    fn sort_key(&self) -> &str {
        &self.topic.name
    }
}
