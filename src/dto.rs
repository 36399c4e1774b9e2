//! JSON shape of a session as exchanged with API clients.
//!
//! The teacher and users are flattened to their ids.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::Session;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDto {
    pub id: Option<i64>,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub teacher_id: Option<i64>,
    pub description: String,
    #[serde(default)]
    pub users: Vec<i64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<NaiveDateTime>,
}

impl From<&Session> for SessionDto {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id(),
            name: session.name().to_owned(),
            date: session.date(),
            teacher_id: session.teacher().and_then(|teacher| teacher.id),
            description: session.description().to_owned(),
            users: session.users().iter().filter_map(|user| user.id).collect(),
            created_at: session.created_at(),
            updated_at: session.updated_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Teacher, User};
    use serde_json::json;

    #[test]
    fn test_session_to_dto_json() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let teacher = Teacher {
            id: Some(7),
            ..Teacher::default()
        };
        let users = vec![
            User {
                id: Some(1),
                ..User::default()
            },
            User {
                id: Some(2),
                ..User::default()
            },
        ];
        let session = Session::builder()
            .id(3)
            .name("Vinyasa")
            .date(date)
            .description("Flow class")
            .teacher(teacher)
            .users(users)
            .build();

        let value = serde_json::to_value(SessionDto::from(&session)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "Vinyasa",
                "date": "2026-03-14",
                "teacher_id": 7,
                "description": "Flow class",
                "users": [1, 2],
                "createdAt": null,
                "updatedAt": null,
            })
        );
    }

    #[test]
    fn test_dto_without_users_deserializes() {
        let dto: SessionDto = serde_json::from_value(json!({
            "id": null,
            "name": "Yin",
            "date": "2026-03-15",
            "teacher_id": null,
            "description": "Slow class",
            "createdAt": null,
            "updatedAt": null,
        }))
        .unwrap();
        assert!(dto.users.is_empty());
        assert_eq!(dto.date, NaiveDate::from_ymd_opt(2026, 3, 15));
    }
}
