//! Fixture Source
//!
//! Fixed sample curriculum served when no backend is configured. Nothing
//! here touches the network; every id resolves to something so each screen
//! renders offline.

use async_trait::async_trait;

use super::traits::{ContentSource, SourceMode};
use crate::domain::{
    ContentResult, Grade, GradeRef, Subject, SubjectDetail, SubjectRef, SubjectRow, Topic,
    TopicDetail, TopicRow, Video,
};

/// (id, name, description)
const CATALOGUE: [(&str, &str, &str); 3] = [
    ("1", "Grade 10", "Foundation year"),
    ("2", "Grade 11", "Intermediate year"),
    ("3", "Grade 12", "Final year"),
];

const GRADE_DESCRIPTION: &str = "Mock grade description";

/// (id, name, description, topic count, estimated hours)
const SUBJECTS: [(&str, &str, &str, u32, u32); 3] = [
    (
        "1",
        "Mathematics",
        "Comprehensive mathematics curriculum covering algebra, geometry, and calculus",
        8,
        45,
    ),
    (
        "2",
        "Physical Sciences",
        "Physics and chemistry fundamentals with practical applications",
        6,
        38,
    ),
    (
        "3",
        "Life Sciences",
        "Biology covering cells, genetics, ecology and human systems",
        7,
        42,
    ),
];

/// (id, subject id, name, description, duration); listed by name per subject
const TOPICS: [(&str, &str, &str, &str, &str); 21] = [
    ("11", "1", "Algebraic Expressions", "Simplifying and factorising", "2.5 hours"),
    ("12", "1", "Equations and Inequalities", "Linear, quadratic and literal", "2.1 hours"),
    ("13", "1", "Euclidean Geometry", "Polygons, circles and proofs", "2.8 hours"),
    ("14", "1", "Exponents and Surds", "Laws of exponents and radicals", "1.4 hours"),
    ("15", "1", "Functions and Graphs", "Linear, quadratic and exponential", "1.8 hours"),
    ("16", "1", "Number Patterns", "Sequences and general terms", "1.2 hours"),
    ("17", "1", "Probability", "Events, Venn diagrams and trees", "1.6 hours"),
    ("18", "1", "Trigonometry", "Ratios, identities and triangles", "2.2 hours"),
    ("21", "2", "Chemical Change", "Reactions and stoichiometry", "1.6 hours"),
    ("22", "2", "Electricity and Magnetism", "Circuits, fields and induction", "2.4 hours"),
    ("23", "2", "Matter and Materials", "Atoms, bonding and properties", "1.9 hours"),
    ("24", "2", "Mechanics", "Motion, forces and Newton's laws", "2.0 hours"),
    ("25", "2", "Vectors and Scalars", "Resultants and components", "1.1 hours"),
    ("26", "2", "Waves and Sound", "Transverse and longitudinal waves", "1.3 hours"),
    ("31", "3", "Biodiversity", "Classification of living things", "1.4 hours"),
    ("32", "3", "Cell Biology", "Cell structure, organelles and division", "1.5 hours"),
    ("33", "3", "Ecology", "Ecosystems, energy flow and cycles", "1.7 hours"),
    ("34", "3", "Evolution", "Natural selection and speciation", "1.8 hours"),
    ("35", "3", "Genetics", "Inheritance, DNA and variation", "2.3 hours"),
    ("36", "3", "Human Physiology", "Organ systems and homeostasis", "2.6 hours"),
    ("37", "3", "Plant Tissues", "Tissues, organs and transport", "1.2 hours"),
];

/// (title, description, duration, completed); `{topic}` is substituted
const LESSONS: [(&str, &str, &str, bool); 3] = [
    ("Introduction to {topic}", "An overview of the key ideas in {topic}.", "8:45", true),
    ("Practice and Review", "Exam-style questions with full solutions.", "14:05", false),
    ("Worked Examples", "Step-by-step solutions to typical problems.", "12:20", false),
];

type SubjectRecord = (&'static str, &'static str, &'static str, u32, u32);
type TopicRecord = (&'static str, &'static str, &'static str, &'static str, &'static str);

/// Grade label for the demo: literal "1" and "2" map to Grades 10 and 11,
/// anything else to Grade 12
pub(crate) fn grade_name(id: &str) -> &'static str {
    match id {
        "1" => "Grade 10",
        "2" => "Grade 11",
        _ => "Grade 12",
    }
}

fn grade_ref(grade_id: &str) -> GradeRef {
    GradeRef {
        id: grade_id.to_string(),
        name: grade_name(grade_id).to_string(),
    }
}

/// Subject and topic ids are scoped by grade as `{grade}-{local}` so the
/// lineage follows the grade they were listed under. Unscoped ids belong to
/// the first grade.
fn split_scoped(id: &str) -> (&str, &str) {
    id.rsplit_once('-').unwrap_or((CATALOGUE[0].0, id))
}

fn scoped(grade_id: &str, local: &str) -> String {
    format!("{}-{}", grade_id, local)
}

/// Subject by local id; unknown ids borrow the first subject's record
fn subject_record(local: &str) -> SubjectRecord {
    SUBJECTS.iter().find(|s| s.0 == local).copied().unwrap_or(SUBJECTS[0])
}

/// Topic by local id; unknown ids borrow the first topic's record
fn topic_record(local: &str) -> TopicRecord {
    TOPICS.iter().find(|t| t.0 == local).copied().unwrap_or(TOPICS[0])
}

/// Offline content source
#[derive(Debug, Default, Clone)]
pub struct FixtureSource;

impl FixtureSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl ContentSource for FixtureSource {
    fn mode(&self) -> SourceMode {
        SourceMode::Demo
    }

    async fn list_grades(&self) -> ContentResult<Vec<Grade>> {
        let mut grades: Vec<Grade> = CATALOGUE
            .iter()
            .map(|(id, name, description)| Grade::new(*id, *name, *description))
            .collect();
        grades.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(grades)
    }

    async fn fetch_grade(&self, id: &str) -> ContentResult<Grade> {
        Ok(Grade::new(id, grade_name(id), GRADE_DESCRIPTION))
    }

    async fn list_subjects(&self, grade_id: &str) -> ContentResult<Vec<SubjectRow>> {
        let mut rows: Vec<SubjectRow> = SUBJECTS
            .iter()
            .map(|(id, name, description, topics, hours)| SubjectRow {
                subject: Subject::new(scoped(grade_id, id), *name, *description, grade_id),
                topic_count: Some(*topics),
                estimated_hours: Some(*hours),
            })
            .collect();
        rows.sort_by(|a, b| a.subject.name.cmp(&b.subject.name));
        Ok(rows)
    }

    async fn fetch_subject(&self, id: &str) -> ContentResult<SubjectDetail> {
        let (grade_id, local) = split_scoped(id);
        let (_, name, description, ..) = subject_record(local);
        Ok(SubjectDetail {
            subject: Subject::new(id, name, description, grade_id),
            grade: grade_ref(grade_id),
        })
    }

    async fn list_topics(&self, subject_id: &str) -> ContentResult<Vec<TopicRow>> {
        let (grade_id, local) = split_scoped(subject_id);
        let (owner, ..) = subject_record(local);
        Ok(TOPICS
            .iter()
            .filter(|t| t.1 == owner)
            .map(|(id, _, name, description, duration)| TopicRow {
                topic: Topic::new(scoped(grade_id, id), *name, *description, subject_id),
                video_count: Some(LESSONS.len() as u32),
                duration: Some(duration.to_string()),
            })
            .collect())
    }

    async fn fetch_topic(&self, id: &str) -> ContentResult<TopicDetail> {
        let (grade_id, local) = split_scoped(id);
        let (_, owner, name, description, _) = topic_record(local);
        let (_, subject_name, ..) = subject_record(owner);
        let subject_id = scoped(grade_id, owner);
        Ok(TopicDetail {
            topic: Topic::new(id, name, description, subject_id.clone()),
            subject: SubjectRef {
                id: subject_id,
                name: subject_name.to_string(),
                grade: grade_ref(grade_id),
            },
        })
    }

    async fn list_videos(&self, topic_id: &str) -> ContentResult<Vec<Video>> {
        let (_, local) = split_scoped(topic_id);
        let (_, _, topic_name, _, _) = topic_record(local);
        Ok(LESSONS
            .iter()
            .enumerate()
            .map(|(index, (title, description, duration, completed))| {
                let lesson = index + 1;
                let mut video = Video::new(
                    format!("{}-{}", topic_id, lesson),
                    title.replace("{topic}", topic_name),
                    description.replace("{topic}", topic_name),
                    format!("https://media.learnhub.example/lessons/{}/{}.mp4", topic_id, lesson),
                    topic_id,
                );
                video.duration = Some(duration.to_string());
                video.completed = Some(*completed);
                video
            })
            .collect())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_grade_name_branches() {
        assert_eq!(grade_name("1"), "Grade 10");
        assert_eq!(grade_name("2"), "Grade 11");
        assert_eq!(grade_name("3"), "Grade 12");
        assert_eq!(grade_name("99"), "Grade 12");
        assert_eq!(grade_name(""), "Grade 12");
        assert_eq!(grade_name("01"), "Grade 12");
    }

    #[tokio::test]
    async fn test_fetch_grade_echoes_id() {
        let grade = FixtureSource::new().fetch_grade("2").await.unwrap();
        assert_eq!(grade, Grade::new("2", "Grade 11", "Mock grade description"));
    }

    #[tokio::test]
    async fn test_subjects_follow_requested_grade() {
        let rows = FixtureSource::new().list_subjects("abc").await.unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.subject.grade_id == "abc"));
        assert!(rows.iter().all(|r| r.subject.id.starts_with("abc-")));
    }

    #[tokio::test]
    async fn test_same_dataset_for_any_grade() {
        let source = FixtureSource::new();
        let a = source.list_subjects("1").await.unwrap();
        let b = source.list_subjects("zzz").await.unwrap();
        fn names(rows: &[SubjectRow]) -> Vec<&str> {
            rows.iter().map(|r| r.subject.name.as_str()).collect()
        }
        assert_eq!(names(&a), names(&b));
    }

    #[test]
    fn test_split_scoped() {
        assert_eq!(split_scoped("2-11"), ("2", "11"));
        assert_eq!(split_scoped("a-b-3"), ("a-b", "3"));
        assert_eq!(split_scoped("22"), ("1", "22"));
    }

    #[tokio::test]
    async fn test_subject_keeps_listed_grade() {
        let detail = FixtureSource::new().fetch_subject("2-1").await.unwrap();
        assert_eq!(detail.subject.name, "Mathematics");
        assert_eq!(detail.subject.grade_id, "2");
        assert_eq!(detail.grade, grade_ref("2"));
        assert_eq!(detail.grade.name, "Grade 11");
    }

    #[tokio::test]
    async fn test_topic_counts_match_listings() {
        let source = FixtureSource::new();
        for row in source.list_subjects("3").await.unwrap() {
            let topics = source.list_topics(&row.subject.id).await.unwrap();
            assert_eq!(Some(topics.len() as u32), row.topic_count);
            assert!(topics.iter().all(|t| t.topic.subject_id == row.subject.id));
            assert!(topics.iter().all(|t| t.topic.id.starts_with("3-")));
        }
    }

    #[tokio::test]
    async fn test_topics_per_subject() {
        let source = FixtureSource::new();
        let topics = source.list_topics("3").await.unwrap();
        let names: Vec<_> = topics.iter().map(|t| t.topic.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Biodiversity",
                "Cell Biology",
                "Ecology",
                "Evolution",
                "Genetics",
                "Human Physiology",
                "Plant Tissues",
            ]
        );

        // Unknown subject falls back to the first subject's topics
        let fallback = source.list_topics("unknown").await.unwrap();
        assert_eq!(fallback[0].topic.name, "Algebraic Expressions");
        assert_eq!(fallback[0].topic.subject_id, "unknown");
    }

    #[tokio::test]
    async fn test_topic_lineage() {
        let source = FixtureSource::new();
        let detail = source.fetch_topic("22").await.unwrap();
        assert_eq!(detail.topic.name, "Electricity and Magnetism");
        assert_eq!(detail.subject.name, "Physical Sciences");
        assert_eq!(detail.subject.grade.name, "Grade 10");

        let detail = source.fetch_topic("2-22").await.unwrap();
        assert_eq!(detail.subject.id, "2-2");
        assert_eq!(detail.topic.subject_id, "2-2");
        assert_eq!(detail.subject.grade, grade_ref("2"));
    }

    #[tokio::test]
    async fn test_videos_match_topic_count() {
        let source = FixtureSource::new();
        let topics = source.list_topics("2-1").await.unwrap();
        let videos = source.list_videos(&topics[0].topic.id).await.unwrap();
        assert_eq!(Some(videos.len() as u32), topics[0].video_count);
        assert_eq!(videos[0].title, "Introduction to Algebraic Expressions");
        assert_eq!(videos[0].topic_id, "2-11");
        assert!(videos.iter().all(|v| v.url.ends_with(".mp4")));
    }
}
