//! Grade Entity
//!
//! Top of the hierarchy; a grade has many subjects.

use serde::{Deserialize, Serialize};
use super::entity::{de, Entity};

/// A school grade (e.g. "Grade 10")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "de::text")]
    pub description: String,
}

impl Grade {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn lineage(&self) -> GradeRef {
        GradeRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

impl Entity for Grade {
    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> &str {
        &self.name
    }
}

/// Grade lineage carried by lower levels for breadcrumbs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GradeRef {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
}
