//! Domain Layer
//!
//! The four-level content hierarchy (grade → subject → topic → video) and the
//! listings a browsing page renders. The backend owns every record; these are
//! request-scoped copies.

mod entity;
mod grade;
mod subject;
mod topic;
mod video;
mod listing;

pub use entity::{sort_entities, ContentError, ContentResult, Entity};
pub use grade::{Grade, GradeRef};
pub use subject::{Subject, SubjectDetail, SubjectRef, SubjectRow, SubjectSummary};
pub use topic::{Topic, TopicDetail, TopicRow, TopicSummary};
pub use video::{Video, VideoEntry};
pub use listing::{GradeCatalogue, GradeSubjects, SubjectTopics, TopicVideos};

pub(crate) use entity::de;
