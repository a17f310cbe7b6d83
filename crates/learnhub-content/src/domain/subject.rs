//! Subject Entity
//!
//! A subject belongs to a grade and has many topics.

use serde::{Deserialize, Serialize};
use super::entity::{de, Entity};
use super::grade::GradeRef;

/// A subject taught in one grade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "de::text")]
    pub description: String,
    #[serde(deserialize_with = "de::id")]
    pub grade_id: String,
}

impl Subject {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        grade_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            grade_id: grade_id.into(),
        }
    }
}

impl Entity for Subject {
    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> &str {
        &self.name
    }
}

/// Subject lineage (with its grade) carried by the topic level
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubjectRef {
    pub id: String,
    pub name: String,
    pub grade: GradeRef,
}

/// A subject fetched by id, with the grade it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectDetail {
    pub subject: Subject,
    pub grade: GradeRef,
}

impl SubjectDetail {
    pub fn lineage(&self) -> SubjectRef {
        SubjectRef {
            id: self.subject.id.clone(),
            name: self.subject.name.clone(),
            grade: self.grade.clone(),
        }
    }
}

/// A subject as listed under a grade, before derived metrics are settled.
///
/// `None` means the source did not supply the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectRow {
    pub subject: Subject,
    pub topic_count: Option<u32>,
    pub estimated_hours: Option<u32>,
}

impl SubjectRow {
    pub fn bare(subject: Subject) -> Self {
        Self {
            subject,
            topic_count: None,
            estimated_hours: None,
        }
    }
}

/// A subject card: the subject plus its derived metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSummary {
    #[serde(flatten)]
    pub subject: Subject,
    pub topic_count: u32,
    /// Placeholder unless the source supplied it
    pub estimated_hours: u32,
}

impl Entity for SubjectSummary {
    fn id(&self) -> &str {
        &self.subject.id
    }

    fn sort_key(&self) -> &str {
        &self.subject.name
    }
}
