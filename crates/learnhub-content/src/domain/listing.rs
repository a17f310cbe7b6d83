//! Page Listings
//!
//! What one browsing page holds once loaded: the current entity plus its
//! immediate children.

use serde::{Deserialize, Serialize};
use super::grade::{Grade, GradeRef};
use super::subject::{Subject, SubjectRef, SubjectSummary};
use super::topic::{Topic, TopicSummary};
use super::video::VideoEntry;

/// All grades, for the landing page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GradeCatalogue {
    pub grades: Vec<Grade>,
}

/// `#/grades/{gradeId}/subjects`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeSubjects {
    pub grade: Grade,
    pub subjects: Vec<SubjectSummary>,
}

/// `#/subjects/{subjectId}/topics`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectTopics {
    pub subject: Subject,
    pub grade: GradeRef,
    pub topics: Vec<TopicSummary>,
}

/// `#/topics/{topicId}/videos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicVideos {
    pub topic: Topic,
    pub subject: SubjectRef,
    pub videos: Vec<VideoEntry>,
}
