//! User entity model, mapped to the "users" table.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

/// A registered user of the studio.
///
/// `password` holds whatever the authentication layer stores (a hash in
/// practice); this crate never reads it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub last_name: String,
    pub first_name: String,
    pub password: String,
    pub admin: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::participate::Entity")]
    Participate,
}

impl Related<super::participate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participate.def()
    }
}

impl Related<super::session::Entity> for Entity {
    fn to() -> RelationDef {
        super::participate::Relation::Session.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::participate::Relation::User.def().rev())
    }
}

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
