//! Content Source Trait
//!
//! Read operations per level of the hierarchy. Fetch-by-id fails with
//! `ContentError::NotFound` when the row is absent; child listings are
//! filtered by foreign key and ordered by name (videos by title).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{
    ContentResult, Grade, SubjectDetail, SubjectRow, TopicDetail, TopicRow, Video,
};

/// Where a source's data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceMode {
    /// Hosted backend
    Live,
    /// Fixed sample data, no network
    Demo,
}

/// Core trait for content sources
///
/// Futures are not `Send`: in the browser they run on the single-threaded
/// executor.
#[async_trait(?Send)]
pub trait ContentSource: Send + Sync {
    fn mode(&self) -> SourceMode;

    /// Every grade, ordered by name
    async fn list_grades(&self) -> ContentResult<Vec<Grade>>;

    async fn fetch_grade(&self, id: &str) -> ContentResult<Grade>;

    /// Subjects of one grade, with topic counts when available
    async fn list_subjects(&self, grade_id: &str) -> ContentResult<Vec<SubjectRow>>;

    /// A subject with its grade
    async fn fetch_subject(&self, id: &str) -> ContentResult<SubjectDetail>;

    /// Topics of one subject, with video counts when available
    async fn list_topics(&self, subject_id: &str) -> ContentResult<Vec<TopicRow>>;

    /// A topic with its subject and grade
    async fn fetch_topic(&self, id: &str) -> ContentResult<TopicDetail>;

    /// Videos of one topic, ordered by title
    async fn list_videos(&self, topic_id: &str) -> ContentResult<Vec<Video>>;
}
