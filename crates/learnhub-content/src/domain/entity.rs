//! Core Entity Trait and Errors
//!
//! Every record in the hierarchy has an opaque, backend-issued id and a key
//! that listings are ordered by.

/// Core trait for all content records
pub trait Entity: Sized + Send + Sync + Clone {
    /// Backend-issued identifier
    fn id(&self) -> &str;

    /// Key that child collections are ordered by (ascending)
    fn sort_key(&self) -> &str;
}

/// Order a collection ascending by sort key
pub fn sort_entities<T: Entity>(items: &mut [T]) {
    items.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
}

/// Common result type for content reads
pub type ContentResult<T> = Result<T, ContentError>;

/// Read failures from a content source
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// Fetch-by-id found no row
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Backend answered with a non-success status
    #[error("Backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    /// Request never produced a response
    #[error("HTTP error: {0}")]
    Http(String),

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ContentError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        ContentError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Lenient field decoders for backend rows.
pub(crate) mod de {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    /// Accept both text (uuid) and integer primary keys.
    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        })
    }

    /// Treat a NULL text column as empty.
    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
    }
}
