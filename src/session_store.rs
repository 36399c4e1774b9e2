use std::collections::BTreeSet;

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, LoaderTrait, ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    SqlErr, TransactionTrait,
};
use tracing::{debug, info, warn};

use crate::dto::SessionDto;
use crate::entity::participate::{
    self, ActiveModel as ParticipateActiveModel, Entity as ParticipateEntity,
};
use crate::entity::session::{self, ActiveModel as SessionActiveModel, Entity as SessionEntity};
use crate::entity::teacher::Entity as TeacherEntity;
use crate::entity::user::{self, Entity as UserEntity};
use crate::error::{StoreError, StoreResult};
use crate::model::{Session, Teacher, User};

const NAME_MAX_LEN: usize = 50;
const DESCRIPTION_MAX_LEN: usize = 2500;

/// A Sea-ORM backed store for yoga sessions.
///
/// `SessionStore` persists [`Session`] records together with their teacher
/// reference and the list of users attending them. Teachers and users are
/// only referenced: the store checks that they exist but never creates or
/// deletes them.
///
/// # Usage
///
/// ```no_run
/// use yoga_sessions_seaorm_store::{DatabaseConfig, Session, SessionStore};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let conn = DatabaseConfig::from_env().connect().await?;
/// let store = SessionStore::new(conn);
///
/// let session = Session::builder()
///     .name("Morning flow")
///     .date(chrono::NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
///     .description("Gentle vinyasa")
///     .build();
/// let saved = store.create(&session).await?;
/// assert!(saved.id().is_some());
/// # Ok(())
/// # }
/// ```
///
/// # Error Handling
///
/// - Sea-ORM errors → [`StoreError::Backend`]
/// - Missing session, teacher or user → [`StoreError::NotFound`]
/// - Participation conflicts → [`StoreError::BadRequest`]
/// - Column constraint violations → [`StoreError::Validation`]
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// The Sea-ORM database connection used for database operations.
    conn: DatabaseConnection,
}

impl SessionStore {
    /// Creates a new store over the given connection.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// The underlying connection, for callers that manage teachers and users.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Inserts a new session and its participation rows.
    ///
    /// Any id already set on `session` is ignored; the database assigns one.
    /// `created_at` and `updated_at` are stamped on insert.
    ///
    /// # Returns
    ///
    /// The stored session as read back from the database.
    ///
    /// # Errors
    ///
    /// * [`StoreError::Validation`] if the name is blank or too long, the date
    ///   is missing, or the description is too long.
    /// * [`StoreError::NotFound`] if the teacher or one of the users does not
    ///   exist.
    pub async fn create(&self, session: &Session) -> StoreResult<Session> {
        let date = validate(session)?;

        let txn = self.conn.begin().await?;
        let teacher_id = ensure_references(&txn, session).await?;

        let model = SessionActiveModel {
            name: Set(session.name().to_owned()),
            date: Set(date),
            teacher_id: Set(teacher_id),
            description: Set(session.description().to_owned()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_participants(&txn, model.id, session.users()).await?;
        txn.commit().await?;

        info!(session_id = model.id, "session created");
        self.find_by_id(model.id)
            .await?
            .ok_or_else(|| StoreError::not_found("session", model.id))
    }

    /// Loads a session by id, with its teacher and users.
    ///
    /// Users come back ordered by id. Returns `Ok(None)` when no session has
    /// this id.
    pub async fn find_by_id(&self, id: i64) -> StoreResult<Option<Session>> {
        debug!(session_id = id, "loading session");

        match SessionEntity::find_by_id(id).one(&self.conn).await? {
            Some(model) => self.hydrate(model).await.map(Some),
            None => Ok(None),
        }
    }

    /// Loads every session, ordered by id.
    ///
    /// Teachers and users are fetched in one batch query each, whatever the
    /// number of sessions.
    pub async fn find_all(&self) -> StoreResult<Vec<Session>> {
        let models = SessionEntity::find()
            .order_by_asc(session::Column::Id)
            .all(&self.conn)
            .await?;

        let teachers = models.load_one(TeacherEntity, &self.conn).await?;
        let users = models
            .load_many_to_many(UserEntity, ParticipateEntity, &self.conn)
            .await?;

        Ok(models
            .into_iter()
            .zip(teachers)
            .zip(users)
            .map(|((model, teacher), mut users)| {
                users.sort_by_key(|user| user.id);
                Session::from_model(model, teacher, users)
            })
            .collect())
    }

    /// Replaces the stored fields of session `id` with those of `session`.
    ///
    /// The name, date, description, teacher and user list are all
    /// overwritten. `created_at` is kept and `updated_at` refreshed. The id
    /// carried by `session` itself is ignored.
    ///
    /// # Errors
    ///
    /// * [`StoreError::NotFound`] if session `id`, the teacher or one of the
    ///   users does not exist.
    /// * [`StoreError::Validation`] as for [`SessionStore::create`].
    pub async fn update(&self, id: i64, session: &Session) -> StoreResult<Session> {
        let date = validate(session)?;

        let txn = self.conn.begin().await?;
        let existing = SessionEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| StoreError::not_found("session", id))?;
        let teacher_id = ensure_references(&txn, session).await?;

        let mut active_model = existing.into_active_model();
        active_model.name = Set(session.name().to_owned());
        active_model.date = Set(date);
        active_model.teacher_id = Set(teacher_id);
        active_model.description = Set(session.description().to_owned());
        active_model.update(&txn).await?;

        ParticipateEntity::delete_many()
            .filter(participate::Column::SessionId.eq(id))
            .exec(&txn)
            .await?;
        insert_participants(&txn, id, session.users()).await?;
        txn.commit().await?;

        info!(session_id = id, "session updated");
        self.find_by_id(id)
            .await?
            .ok_or_else(|| StoreError::not_found("session", id))
    }

    /// Deletes a session and its participation rows.
    ///
    /// # Errors
    ///
    /// * [`StoreError::NotFound`] if no session has this id.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        let txn = self.conn.begin().await?;

        if SessionEntity::find_by_id(id).one(&txn).await?.is_none() {
            warn!(session_id = id, "delete requested for unknown session");
            return Err(StoreError::not_found("session", id));
        }

        ParticipateEntity::delete_many()
            .filter(participate::Column::SessionId.eq(id))
            .exec(&txn)
            .await?;
        SessionEntity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        info!(session_id = id, "session deleted");
        Ok(())
    }

    /// Registers `user_id` as attending session `id`.
    ///
    /// # Errors
    ///
    /// * [`StoreError::NotFound`] if the session or the user does not exist.
    /// * [`StoreError::BadRequest`] if the user already participates, including
    ///   when a concurrent request registered the same user first.
    pub async fn participate(&self, id: i64, user_id: i64) -> StoreResult<()> {
        let txn = self.conn.begin().await?;

        if SessionEntity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(StoreError::not_found("session", id));
        }
        if UserEntity::find_by_id(user_id).one(&txn).await?.is_none() {
            return Err(StoreError::not_found("user", user_id));
        }
        if is_participating(&txn, id, user_id).await? {
            return Err(already_participating(id, user_id));
        }

        ParticipateEntity::insert(ParticipateActiveModel {
            user_id: Set(user_id),
            session_id: Set(id),
        })
        .exec_without_returning(&txn)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => already_participating(id, user_id),
            _ => StoreError::Backend(e),
        })?;
        txn.commit().await?;

        info!(session_id = id, user_id, "user joined session");
        Ok(())
    }

    /// Removes `user_id` from the attendees of session `id`.
    ///
    /// # Errors
    ///
    /// * [`StoreError::NotFound`] if the session does not exist.
    /// * [`StoreError::BadRequest`] if the user does not participate.
    pub async fn no_longer_participate(&self, id: i64, user_id: i64) -> StoreResult<()> {
        if SessionEntity::find_by_id(id).one(&self.conn).await?.is_none() {
            return Err(StoreError::not_found("session", id));
        }
        if !is_participating(&self.conn, id, user_id).await? {
            return Err(StoreError::BadRequest(format!(
                "user {user_id} does not participate in session {id}"
            )));
        }

        ParticipateEntity::delete_many()
            .filter(participate::Column::SessionId.eq(id))
            .filter(participate::Column::UserId.eq(user_id))
            .exec(&self.conn)
            .await?;

        info!(session_id = id, user_id, "user left session");
        Ok(())
    }

    /// Turns a client payload into a session, resolving teacher and user ids.
    ///
    /// Ids that match no stored teacher or user are dropped, leaving the
    /// caller to decide whether that is acceptable.
    pub async fn resolve(&self, dto: &SessionDto) -> StoreResult<Session> {
        let teacher = match dto.teacher_id {
            Some(teacher_id) => TeacherEntity::find_by_id(teacher_id)
                .one(&self.conn)
                .await?
                .map(Teacher::from),
            None => None,
        };

        let users = if dto.users.is_empty() {
            Vec::new()
        } else {
            UserEntity::find()
                .filter(user::Column::Id.is_in(dto.users.iter().copied()))
                .order_by_asc(user::Column::Id)
                .all(&self.conn)
                .await?
                .into_iter()
                .map(User::from)
                .collect()
        };

        Ok(Session::new(
            dto.id,
            dto.name.clone(),
            dto.date,
            dto.description.clone(),
            teacher,
            users,
            dto.created_at,
            dto.updated_at,
        ))
    }

    async fn hydrate(&self, model: session::Model) -> StoreResult<Session> {
        let teacher = model.find_related(TeacherEntity).one(&self.conn).await?;
        let users = model
            .find_related(UserEntity)
            .order_by_asc(user::Column::Id)
            .all(&self.conn)
            .await?;
        Ok(Session::from_model(model, teacher, users))
    }
}

async fn is_participating<C>(db: &C, id: i64, user_id: i64) -> Result<bool, DbErr>
where
    C: ConnectionTrait,
{
    let count = ParticipateEntity::find()
        .filter(participate::Column::SessionId.eq(id))
        .filter(participate::Column::UserId.eq(user_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

fn already_participating(id: i64, user_id: i64) -> StoreError {
    StoreError::BadRequest(format!(
        "user {user_id} already participates in session {id}"
    ))
}

/// Checks the column constraints and returns the session date.
fn validate(session: &Session) -> StoreResult<NaiveDate> {
    let name = session.name();
    if name.trim().is_empty() {
        return Err(StoreError::Validation("name must not be blank".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(StoreError::Validation(format!(
            "name must be at most {NAME_MAX_LEN} characters"
        )));
    }
    if session.description().chars().count() > DESCRIPTION_MAX_LEN {
        return Err(StoreError::Validation(format!(
            "description must be at most {DESCRIPTION_MAX_LEN} characters"
        )));
    }
    session
        .date()
        .ok_or_else(|| StoreError::Validation("date is required".into()))
}

/// Verifies the teacher and every user exist; returns the teacher id.
async fn ensure_references<C>(db: &C, session: &Session) -> StoreResult<Option<i64>>
where
    C: ConnectionTrait,
{
    let teacher_id = session.teacher().and_then(|teacher| teacher.id);
    if let Some(teacher_id) = teacher_id {
        if TeacherEntity::find_by_id(teacher_id).one(db).await?.is_none() {
            return Err(StoreError::not_found("teacher", teacher_id));
        }
    }

    for user_id in participant_ids(session.users()) {
        if UserEntity::find_by_id(user_id).one(db).await?.is_none() {
            return Err(StoreError::not_found("user", user_id));
        }
    }

    Ok(teacher_id)
}

async fn insert_participants<C>(db: &C, session_id: i64, users: &[User]) -> StoreResult<()>
where
    C: ConnectionTrait,
{
    let rows: Vec<_> = participant_ids(users)
        .into_iter()
        .map(|user_id| ParticipateActiveModel {
            user_id: Set(user_id),
            session_id: Set(session_id),
        })
        .collect();

    // insert_many rejects an empty batch
    if rows.is_empty() {
        return Ok(());
    }

    ParticipateEntity::insert_many(rows)
        .exec_without_returning(db)
        .await?;
    Ok(())
}

/// Distinct ids of the persisted users in `users`; unsaved users are skipped.
fn participant_ids(users: &[User]) -> BTreeSet<i64> {
    users.iter().filter_map(|user| user.id).collect()
}
