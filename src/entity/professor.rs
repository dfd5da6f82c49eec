// src/entity/professor.rs
use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub expertise: Vec<String>,
    pub avatar: Option<String>,
    pub email: Option<String>,
}

impl Record for Professor {
    fn id(&self) -> &str {
        &self.id
    }
}
