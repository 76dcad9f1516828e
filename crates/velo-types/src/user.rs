use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};
use crate::id::{SessionId, UserId};

/// A registered user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_new(id: UserId, new: NewUser, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            created_at,
        }
    }
}

/// Input for `POST /users`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub name: String,
}

impl NewUser {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Reject input that would create an unnamed user.
    pub fn validate(&self) -> TypeResult<()> {
        if self.name.is_empty() {
            return Err(TypeError::MissingField { field: "name" });
        }
        Ok(())
    }
}

/// A login session belonging to one user.
///
/// Sessions are read-only over HTTP; they are opened through the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: SessionId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}
