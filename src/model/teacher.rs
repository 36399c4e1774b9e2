use std::hash::{Hash, Hasher};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entity::teacher;

/// A teacher running sessions. Equality and hashing use `id` only.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: Option<i64>,
    pub last_name: String,
    pub first_name: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Teacher {
    pub fn new(
        id: Option<i64>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        created_at: Option<NaiveDateTime>,
        updated_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id,
            last_name: last_name.into(),
            first_name: first_name.into(),
            created_at,
            updated_at,
        }
    }
}

impl PartialEq for Teacher {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Teacher {}

impl Hash for Teacher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<teacher::Model> for Teacher {
    fn from(model: teacher::Model) -> Self {
        Self {
            id: Some(model.id),
            last_name: model.last_name,
            first_name: model.first_name,
            created_at: Some(model.created_at),
            updated_at: Some(model.updated_at),
        }
    }
}
