//! LearnHub Content
//!
//! Loads the grade → subject → topic → video hierarchy for the browsing
//! front-end, from the hosted backend or, when none is configured, from a
//! fixed demo dataset.

pub mod config;
pub mod domain;
pub mod loader;
pub mod placeholder;
pub mod source;
pub mod state;


pub use config::BackendConfig;
pub use domain::{
    ContentError, ContentResult, Entity, Grade, GradeCatalogue, GradeRef, GradeSubjects, Subject,
    SubjectRef, SubjectSummary, SubjectTopics, Topic, TopicSummary, TopicVideos, Video,
    VideoEntry,
};
pub use loader::ContentLoader;
pub use source::{select_source, ContentSource, FixtureSource, RestSource, SourceMode};
pub use state::{ContentKind, LoadFailure, LoadState, PageState, RequestToken};
