//! Hosted Backend Source
//!
//! Reads the grade/subject/topic/video tables through the backend's
//! PostgREST endpoint.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::query::TableQuery;
use super::traits::{ContentSource, SourceMode};
use crate::domain::{
    de, ContentError, ContentResult, Grade, GradeRef, Subject, SubjectDetail, SubjectRef,
    SubjectRow, Topic, TopicDetail, TopicRow, Video,
};

/// PostgREST-backed content source
pub struct RestSource {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl RestSource {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// Run a query and decode the returned JSON array
    async fn fetch_rows<T: DeserializeOwned>(&self, query: &TableQuery) -> ContentResult<Vec<T>> {
        let url = format!("{}{}", self.base_url, query.path());
        debug!("GET {} {:?}", url, query.params());

        let response = self
            .client
            .get(&url)
            .query(&query.params())
            .header("apikey", &self.anon_key)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.anon_key))
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ContentError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ContentError::Http(e.to_string()))?;

        if !status.is_success() {
            warn!("{} answered {}: {}", url, status, body);
            return Err(ContentError::Backend {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ContentError::Decode(e.to_string()))
    }

    /// Fetch-by-id: first row, or `NotFound`
    async fn fetch_one<T: DeserializeOwned>(
        &self,
        entity: &'static str,
        id: &str,
        query: TableQuery,
    ) -> ContentResult<T> {
        let query = query.eq("id", id).limit(1);
        self.fetch_rows(&query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ContentError::not_found(entity, id))
    }
}

// ========================
// Wire Shapes
// ========================

/// `relation(count)` aggregate: `[{"count": n}]`
#[derive(Debug, Deserialize)]
struct CountAggregate {
    count: u32,
}

fn first_count(aggregate: &[CountAggregate]) -> Option<u32> {
    aggregate.first().map(|a| a.count)
}

#[derive(Debug, Deserialize)]
struct SubjectWire {
    #[serde(flatten)]
    subject: Subject,
    #[serde(default)]
    topics: Vec<CountAggregate>,
}

#[derive(Debug, Deserialize)]
struct SubjectDetailWire {
    #[serde(flatten)]
    subject: Subject,
    #[serde(default)]
    grades: Option<GradeRef>,
}

#[derive(Debug, Deserialize)]
struct TopicWire {
    #[serde(flatten)]
    topic: Topic,
    #[serde(default)]
    videos: Vec<CountAggregate>,
}

#[derive(Debug, Deserialize)]
struct TopicSubjectWire {
    #[serde(deserialize_with = "de::id")]
    id: String,
    #[serde(default, deserialize_with = "de::text")]
    name: String,
    #[serde(default)]
    grades: Option<GradeRef>,
}

#[derive(Debug, Deserialize)]
struct TopicDetailWire {
    #[serde(flatten)]
    topic: Topic,
    #[serde(default)]
    subjects: Option<TopicSubjectWire>,
}

impl From<SubjectDetailWire> for SubjectDetail {
    fn from(wire: SubjectDetailWire) -> Self {
        // Embedded relation can be null under row-level security
        let grade = wire.grades.unwrap_or_else(|| GradeRef {
            id: wire.subject.grade_id.clone(),
            name: String::new(),
        });
        SubjectDetail {
            subject: wire.subject,
            grade,
        }
    }
}

impl From<TopicDetailWire> for TopicDetail {
    fn from(wire: TopicDetailWire) -> Self {
        let subject = match wire.subjects {
            Some(embedded) => SubjectRef {
                id: embedded.id,
                name: embedded.name,
                grade: embedded.grades.unwrap_or_default(),
            },
            None => SubjectRef {
                id: wire.topic.subject_id.clone(),
                ..SubjectRef::default()
            },
        };
        TopicDetail {
            topic: wire.topic,
            subject,
        }
    }
}

// ========================
// Reads
// ========================

#[async_trait(?Send)]
impl ContentSource for RestSource {
    fn mode(&self) -> SourceMode {
        SourceMode::Live
    }

    async fn list_grades(&self) -> ContentResult<Vec<Grade>> {
        let query = TableQuery::table("grades")
            .select("id, name, description")
            .order_asc("name");
        self.fetch_rows(&query).await
    }

    async fn fetch_grade(&self, id: &str) -> ContentResult<Grade> {
        let query = TableQuery::table("grades").select("id, name, description");
        self.fetch_one("grade", id, query).await
    }

    async fn list_subjects(&self, grade_id: &str) -> ContentResult<Vec<SubjectRow>> {
        let query = TableQuery::table("subjects")
            .select("id, name, description, grade_id, topics(count)")
            .eq("grade_id", grade_id)
            .order_asc("name");
        let rows: Vec<SubjectWire> = self.fetch_rows(&query).await?;

        Ok(rows
            .into_iter()
            .map(|wire| SubjectRow {
                topic_count: first_count(&wire.topics),
                subject: wire.subject,
                estimated_hours: None,
            })
            .collect())
    }

    async fn fetch_subject(&self, id: &str) -> ContentResult<SubjectDetail> {
        let query = TableQuery::table("subjects")
            .select("id, name, description, grade_id, grades(id, name)");
        let wire: SubjectDetailWire = self.fetch_one("subject", id, query).await?;
        Ok(wire.into())
    }

    async fn list_topics(&self, subject_id: &str) -> ContentResult<Vec<TopicRow>> {
        let query = TableQuery::table("topics")
            .select("id, name, description, subject_id, videos(count)")
            .eq("subject_id", subject_id)
            .order_asc("name");
        let rows: Vec<TopicWire> = self.fetch_rows(&query).await?;

        Ok(rows
            .into_iter()
            .map(|wire| TopicRow {
                video_count: first_count(&wire.videos),
                topic: wire.topic,
                duration: None,
            })
            .collect())
    }

    async fn fetch_topic(&self, id: &str) -> ContentResult<TopicDetail> {
        let query = TableQuery::table("topics")
            .select("id, name, description, subject_id, subjects(id, name, grades(id, name))");
        let wire: TopicDetailWire = self.fetch_one("topic", id, query).await?;
        Ok(wire.into())
    }

    async fn list_videos(&self, topic_id: &str) -> ContentResult<Vec<Video>> {
        let query = TableQuery::table("videos")
            .eq("topic_id", topic_id)
            .order_asc("title");
        self.fetch_rows(&query).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, RestSource) {
        let server = MockServer::start().await;
        let source = RestSource::new(format!("{}/", server.uri()), "anon-key");
        (server, source)
    }

    #[tokio::test]
    async fn test_fetch_grade_sends_credentials() {
        let (server, source) = setup().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/grades"))
            .and(query_param("id", "eq.g1"))
            .and(query_param("limit", "1"))
            .and(header("apikey", "anon-key"))
            .and(header("authorization", "Bearer anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "g1", "name": "Grade 10", "description": "Foundation year"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let grade = source.fetch_grade("g1").await.expect("grade");
        assert_eq!(grade, Grade::new("g1", "Grade 10", "Foundation year"));
    }

    #[tokio::test]
    async fn test_missing_row_is_not_found() {
        let (server, source) = setup().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/grades"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = source.fetch_grade("nope").await.unwrap_err();
        assert_eq!(err, ContentError::not_found("grade", "nope"));
    }

    #[tokio::test]
    async fn test_list_subjects_reads_nested_counts() {
        let (server, source) = setup().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/subjects"))
            .and(query_param("select", "id,name,description,grade_id,topics(count)"))
            .and(query_param("grade_id", "eq.g1"))
            .and(query_param("order", "name.asc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "s1", "name": "Accounting", "description": null, "grade_id": "g1",
                 "topics": [{"count": 4}]},
                {"id": "s2", "name": "Biology", "description": "Cells", "grade_id": "g1",
                 "topics": []}
            ])))
            .mount(&server)
            .await;

        let rows = source.list_subjects("g1").await.expect("subjects");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].subject.name, "Accounting");
        assert_eq!(rows[0].topic_count, Some(4));
        assert_eq!(rows[1].topic_count, None);
        assert_eq!(rows[1].estimated_hours, None);
    }

    #[tokio::test]
    async fn test_fetch_topic_with_lineage() {
        let (server, source) = setup().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/topics"))
            .and(query_param("id", "eq.t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "t1", "name": "Functions", "description": "f(x)", "subject_id": "s1",
                 "subjects": {"id": "s1", "name": "Mathematics",
                              "grades": {"id": "g1", "name": "Grade 10"}}}
            ])))
            .mount(&server)
            .await;

        let detail = source.fetch_topic("t1").await.expect("topic");
        assert_eq!(detail.topic.name, "Functions");
        assert_eq!(detail.subject.name, "Mathematics");
        assert_eq!(detail.subject.grade.name, "Grade 10");
    }

    #[tokio::test]
    async fn test_fetch_subject_without_embedded_grade() {
        let (server, source) = setup().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/subjects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "s1", "name": "Mathematics", "description": "", "grade_id": "g1",
                 "grades": null}
            ])))
            .mount(&server)
            .await;

        let detail = source.fetch_subject("s1").await.expect("subject");
        assert_eq!(detail.grade.id, "g1");
        assert_eq!(detail.grade.name, "");
    }

    #[tokio::test]
    async fn test_error_status_is_backend_error() {
        let (server, source) = setup().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/videos"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = source.list_videos("t1").await.unwrap_err();
        assert_eq!(
            err,
            ContentError::Backend {
                status: 401,
                message: "invalid api key".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (server, source) = setup().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/grades"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"oops\": true}"))
            .mount(&server)
            .await;

        let err = source.list_grades().await.unwrap_err();
        assert!(matches!(err, ContentError::Decode(_)));
    }
}
