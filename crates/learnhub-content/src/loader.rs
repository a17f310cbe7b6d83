//! Hierarchical Content Loader
//!
//! Given one path id, resolves the current entity plus its immediate
//! children: parent and child reads run together, counts are merged in,
//! missing metrics get placeholders, children come back ordered by name.
//! Any read failure fails the whole load with a generic `LoadFailure`;
//! the underlying error is only logged.

use std::sync::Arc;

use futures::try_join;
use log::{debug, error};

use crate::config::BackendConfig;
use crate::domain::{
    sort_entities, ContentError, GradeCatalogue, GradeSubjects, SubjectRow, SubjectSummary,
    SubjectTopics, TopicRow, TopicSummary, TopicVideos, Video, VideoEntry,
};
use crate::placeholder;
use crate::source::{select_source, ContentSource, SourceMode};
use crate::state::{ContentKind, LoadFailure};

/// Loads one browsing page's worth of content
#[derive(Clone)]
pub struct ContentLoader {
    source: Arc<dyn ContentSource>,
}

impl ContentLoader {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Pick the source from configuration (fixture when unconfigured)
    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(select_source(config))
    }

    pub fn mode(&self) -> SourceMode {
        self.source.mode()
    }

    /// All grades
    pub async fn grade_catalogue(&self) -> Result<GradeCatalogue, LoadFailure> {
        let mut grades = self
            .source
            .list_grades()
            .await
            .map_err(|err| failed(ContentKind::Grades, "*", err))?;
        sort_entities(&mut grades);
        Ok(GradeCatalogue { grades })
    }

    /// A grade and its subjects
    pub async fn grade_subjects(&self, grade_id: &str) -> Result<GradeSubjects, LoadFailure> {
        let (grade, rows) = try_join!(
            self.source.fetch_grade(grade_id),
            self.source.list_subjects(grade_id),
        )
        .map_err(|err| failed(ContentKind::Subjects, grade_id, err))?;

        let mut subjects: Vec<SubjectSummary> = rows.into_iter().map(summarize_subject).collect();
        sort_entities(&mut subjects);

        debug!("grade {} has {} subjects", grade_id, subjects.len());
        Ok(GradeSubjects { grade, subjects })
    }

    /// A subject (with its grade) and its topics
    pub async fn subject_topics(&self, subject_id: &str) -> Result<SubjectTopics, LoadFailure> {
        let (detail, rows) = try_join!(
            self.source.fetch_subject(subject_id),
            self.source.list_topics(subject_id),
        )
        .map_err(|err| failed(ContentKind::Topics, subject_id, err))?;

        let mut topics: Vec<TopicSummary> = rows.into_iter().map(summarize_topic).collect();
        sort_entities(&mut topics);

        debug!("subject {} has {} topics", subject_id, topics.len());
        Ok(SubjectTopics {
            subject: detail.subject,
            grade: detail.grade,
            topics,
        })
    }

    /// A topic (with subject and grade) and its videos
    pub async fn topic_videos(&self, topic_id: &str) -> Result<TopicVideos, LoadFailure> {
        let (detail, mut videos) = try_join!(
            self.source.fetch_topic(topic_id),
            self.source.list_videos(topic_id),
        )
        .map_err(|err| failed(ContentKind::Videos, topic_id, err))?;

        sort_entities(&mut videos);
        let videos: Vec<VideoEntry> = videos
            .into_iter()
            .enumerate()
            .map(|(index, video)| settle_video(index, video))
            .collect();

        debug!("topic {} has {} videos", topic_id, videos.len());
        Ok(TopicVideos {
            topic: detail.topic,
            subject: detail.subject,
            videos,
        })
    }
}

fn failed(kind: ContentKind, id: &str, err: ContentError) -> LoadFailure {
    error!("loading {} for {:?} failed: {}", kind, id, err);
    LoadFailure::new(kind)
}

fn summarize_subject(row: SubjectRow) -> SubjectSummary {
    let estimated_hours = row
        .estimated_hours
        .unwrap_or_else(|| placeholder::estimated_hours(&row.subject.id));
    SubjectSummary {
        topic_count: row.topic_count.unwrap_or(0),
        estimated_hours,
        subject: row.subject,
    }
}

fn summarize_topic(row: TopicRow) -> TopicSummary {
    let duration = row
        .duration
        .unwrap_or_else(|| placeholder::topic_duration(&row.topic.id));
    TopicSummary {
        video_count: row.video_count.unwrap_or(0),
        duration,
        topic: row.topic,
    }
}

fn settle_video(index: usize, video: Video) -> VideoEntry {
    let duration = video
        .duration
        .unwrap_or_else(|| placeholder::video_duration(&video.id));
    let thumbnail = video
        .thumbnail
        .unwrap_or_else(|| placeholder::video_thumbnail(index));
    let completed = video
        .completed
        .unwrap_or_else(|| placeholder::video_completed(&video.id));

    VideoEntry {
        id: video.id,
        title: video.title,
        description: video.description,
        url: video.url,
        topic_id: video.topic_id,
        duration,
        thumbnail,
        completed,
        lesson: index + 1,
    }
}
