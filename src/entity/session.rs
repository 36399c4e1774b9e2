//! Session entity model for Sea-ORM database interaction.
//!
//! This module defines the database schema representation of a session. It
//! provides the Sea-ORM entity definition that maps to the "sessions" table.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

/// Sea-ORM entity model representing a session in the database.
///
/// # Database Schema
///
/// | Column      | Type                    | Description                        |
/// |-------------|-------------------------|------------------------------------|
/// | id          | BIGINT (Primary Key)    | Generated session identifier       |
/// | name        | VARCHAR(50)             | Display name                       |
/// | date        | DATE                    | Day the session takes place        |
/// | teacher_id  | BIGINT NULL             | References `teachers.id`           |
/// | description | VARCHAR(2500)           | Free text description              |
/// | created_at  | TIMESTAMP               | Stamped on insert                  |
/// | updated_at  | TIMESTAMP               | Stamped on every save              |
///
/// # Usage
///
/// This entity is used internally by the `SessionStore`; callers normally work
/// with [`crate::model::Session`] instead.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sessions")]
pub struct Model {
    /// Auto-incremented primary key.
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,

    pub date: Date,

    /// The teacher running the session, if one is assigned.
    ///
    /// Deleting the teacher leaves the session in place with this column
    /// set to `NULL`.
    pub teacher_id: Option<i64>,

    pub description: String,

    pub created_at: DateTime,

    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherId",
        to = "super::teacher::Column::Id",
        on_delete = "SetNull"
    )]
    Teacher,
    #[sea_orm(has_many = "super::participate::Entity")]
    Participate,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::participate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participate.def()
    }
}

/// Users of a session, reached through the `participate` join table.
impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::participate::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::participate::Relation::Session.def().rev())
    }
}

/// Stamps `created_at` on insert and `updated_at` on every save.
#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now().naive_utc();
        if insert {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}
