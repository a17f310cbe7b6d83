//! UI Components
//!
//! Browsing pages and the pieces they share.

mod breadcrumbs;
mod demo_banner;
mod empty_state;
mod error_panel;
mod grade_catalogue;
mod loading_skeleton;
mod subject_list;
mod topic_list;
mod video_list;
mod video_player;

pub use breadcrumbs::{Breadcrumbs, Crumb};
pub use demo_banner::DemoBanner;
pub use empty_state::EmptyState;
pub use error_panel::ErrorPanel;
pub use grade_catalogue::GradeCataloguePage;
pub use loading_skeleton::LoadingSkeleton;
pub use subject_list::GradeSubjectsPage;
pub use topic_list::SubjectTopicsPage;
pub use video_list::TopicVideosPage;
pub use video_player::VideoPlayer;
