// src/entity/user.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Choice, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Professor,
    Student,
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Professor => write!(f, "professor"),
            UserType::Student => write!(f, "student"),
        }
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professor" => Ok(UserType::Professor),
            "student" => Ok(UserType::Student),
            _ => Err(format!("Invalid user type: {}", s)),
        }
    }
}

impl Choice for UserType {
    const VARIANTS: &'static [&'static str] = &["professor", "student"];
}

/// A stored account. The password is kept as given and compared verbatim;
/// never serialize this type to a client, use [`PublicUser`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub github_profile: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for User {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A user as exposed over the API, without credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub username: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
    pub github_profile: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            user_type: user.user_type,
            github_profile: user.github_profile,
            created_at: user.created_at,
        }
    }
}
