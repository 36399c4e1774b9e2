use std::hash::{Hash, Hasher};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::entity::user;

/// A studio member who can attend sessions. Equality and hashing use `id` only.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<i64>,
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub admin: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl User {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Option<i64>,
        email: impl Into<String>,
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        password: impl Into<String>,
        admin: bool,
        created_at: Option<NaiveDateTime>,
        updated_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            password: password.into(),
            admin,
            created_at,
            updated_at,
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<user::Model> for User {
    fn from(model: user::Model) -> Self {
        Self {
            id: Some(model.id),
            email: model.email,
            last_name: model.last_name,
            first_name: model.first_name,
            password: model.password,
            admin: model.admin,
            created_at: Some(model.created_at),
            updated_at: Some(model.updated_at),
        }
    }
}
