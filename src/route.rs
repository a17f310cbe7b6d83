//! Hash Routes
//!
//! The browsing path is carried in the URL hash:
//! `#/grades`, `#/grades/{gradeId}/subjects`, `#/subjects/{subjectId}/topics`,
//! `#/topics/{topicId}/videos`. Unknown paths land on the grade catalogue.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that cannot appear raw inside an id segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?');

/// Which browsing page is showing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Catalogue,
    Subjects { grade_id: String },
    Topics { subject_id: String },
    Videos { topic_id: String },
}

impl Route {
    /// Parse a location hash (with or without the leading `#`)
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').split('?').next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        fn decode(segment: &str) -> String {
            percent_decode_str(segment).decode_utf8_lossy().into_owned()
        }

        match segments.as_slice() {
            ["grades", id, "subjects"] => Route::Subjects { grade_id: decode(id) },
            ["subjects", id, "topics"] => Route::Topics { subject_id: decode(id) },
            ["topics", id, "videos"] => Route::Videos { topic_id: decode(id) },
            _ => Route::Catalogue,
        }
    }

    /// Link target for this route
    pub fn href(&self) -> String {
        fn encode(id: &str) -> String {
            utf8_percent_encode(id, SEGMENT).to_string()
        }

        match self {
            Route::Catalogue => "#/grades".to_string(),
            Route::Subjects { grade_id } => format!("#/grades/{}/subjects", encode(grade_id)),
            Route::Topics { subject_id } => format!("#/subjects/{}/topics", encode(subject_id)),
            Route::Videos { topic_id } => format!("#/topics/{}/videos", encode(topic_id)),
        }
    }

    pub fn grade_id(&self) -> Option<String> {
        match self {
            Route::Subjects { grade_id } => Some(grade_id.clone()),
            _ => None,
        }
    }

    pub fn subject_id(&self) -> Option<String> {
        match self {
            Route::Topics { subject_id } => Some(subject_id.clone()),
            _ => None,
        }
    }

    pub fn topic_id(&self) -> Option<String> {
        match self {
            Route::Videos { topic_id } => Some(topic_id.clone()),
            _ => None,
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Route::Catalogue => Page::Catalogue,
            Route::Subjects { .. } => Page::Subjects,
            Route::Topics { .. } => Page::Topics,
            Route::Videos { .. } => Page::Videos,
        }
    }
}

/// Route without its id; siblings share a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Catalogue,
    Subjects,
    Topics,
    Videos,
}

/// Route for the browser's current location
pub fn current() -> Route {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Route::parse(&hash))
        .unwrap_or_default()
}
