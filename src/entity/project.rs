// src/entity/project.rs
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

/// Free-form descriptive content attached to a project.
///
/// The seed data mixes shapes: `architecture` is a keyed map
/// (`backend`, `database`, `frontend`), while technologies, modules and
/// deliverables are plain lists. Clients branch on the shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outline {
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

impl Outline {
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Outline::List(items.into_iter().map(Into::into).collect())
    }

    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Outline::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Catalog number, 1-8 in the seeded semester
    pub theme: u32,
    pub context: String,
    pub problem: String,
    pub architecture: Outline,
    pub technologies: Outline,
    pub modules: Outline,
    pub deliverables: Outline,
    pub created_at: DateTime<Utc>,
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }
}
