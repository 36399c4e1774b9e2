use std::any::Any;
use std::hash::{Hash, Hasher};
use std::ptr;

use chrono::{NaiveDate, NaiveDateTime};

use super::{Teacher, User};
use crate::entity::{session, teacher, user};

/// A scheduled session, with its teacher and attending users.
///
/// Identity is the `id` alone: two sessions are equal when their ids are
/// equal, whatever their other fields hold, and two sessions that have not
/// been assigned an id yet are equal to each other. [`Hash`] follows the same
/// rule, so sessions can be keyed in hash maps before and after they are
/// persisted (as long as the id is not changed while keyed).
///
/// # Examples
///
/// ```
/// use yoga_sessions_seaorm_store::Session;
///
/// let first = Session::builder().id(1).name("Morning flow").build();
/// let renamed = Session::builder().id(1).name("Evening flow").build();
/// let other = Session::builder().id(2).name("Morning flow").build();
///
/// assert_eq!(first, renamed);
/// assert_ne!(first, other);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Session {
    id: Option<i64>,
    name: String,
    date: Option<NaiveDate>,
    description: String,
    teacher: Option<Teacher>,
    users: Vec<User>,
    created_at: Option<NaiveDateTime>,
    updated_at: Option<NaiveDateTime>,
}

impl Session {
    /// Creates a session from every attribute, in column order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Option<i64>,
        name: impl Into<String>,
        date: Option<NaiveDate>,
        description: impl Into<String>,
        teacher: Option<Teacher>,
        users: Vec<User>,
        created_at: Option<NaiveDateTime>,
        updated_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            date,
            description: description.into(),
            teacher,
            users,
            created_at,
            updated_at,
        }
    }

    /// Starts a [`SessionBuilder`] with every field unset.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// Assembles a session from its row and the rows it references.
    pub(crate) fn from_model(
        model: session::Model,
        teacher: Option<teacher::Model>,
        users: Vec<user::Model>,
    ) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            date: Some(model.date),
            description: model.description,
            teacher: teacher.map(Teacher::from),
            users: users.into_iter().map(User::from).collect(),
            created_at: Some(model.created_at),
            updated_at: Some(model.updated_at),
        }
    }

    /// Database identifier, `None` until the session is stored.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Day the session takes place.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Free text description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Teacher running the session, if any.
    pub fn teacher(&self) -> Option<&Teacher> {
        self.teacher.as_ref()
    }

    /// Attending users, in the order they were set or loaded.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// When the session row was inserted.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }

    /// When the session row was last saved.
    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        self.updated_at
    }

    /// Sets the identifier. This changes how the session compares and hashes.
    pub fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the session day.
    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    /// Sets the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Sets or clears the teacher.
    pub fn set_teacher(&mut self, teacher: Option<Teacher>) {
        self.teacher = teacher;
    }

    /// Replaces the attending users.
    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// Sets the creation timestamp. The store stamps its own on insert.
    pub fn set_created_at(&mut self, created_at: Option<NaiveDateTime>) {
        self.created_at = created_at;
    }

    /// Sets the last-update timestamp. The store stamps its own on save.
    pub fn set_updated_at(&mut self, updated_at: Option<NaiveDateTime>) {
        self.updated_at = updated_at;
    }

    /// Compares against an arbitrary, possibly missing value.
    ///
    /// Returns `false` for `None` and for anything that is not a `Session`,
    /// `true` for `self`, and otherwise compares ids.
    ///
    /// ```
    /// use std::any::Any;
    /// use yoga_sessions_seaorm_store::Session;
    ///
    /// let session = Session::builder().id(1).build();
    /// assert!(session.equals(Some(&session.clone() as &dyn Any)));
    /// assert!(!session.equals(Some(&"string" as &dyn Any)));
    /// assert!(!session.equals(None));
    /// ```
    pub fn equals(&self, other: Option<&dyn Any>) -> bool {
        let Some(other) = other else {
            return false;
        };
        if ptr::addr_eq(self as *const Self, other as *const dyn Any) {
            return true;
        }
        match other.downcast_ref::<Session>() {
            Some(other) => other.can_equal(self) && self.id == other.id,
            None => false,
        }
    }

    /// Whether `other` is of a type a session can be compared with.
    pub fn can_equal(&self, other: &dyn Any) -> bool {
        other.is::<Session>()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.equals(Some(other as &dyn Any))
    }
}

impl Eq for Session {}

impl Hash for Session {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Collects session fields in any order, then builds a [`Session`].
///
/// Fields left unset keep their [`Default`] value. No validation happens
/// here; the store checks column constraints when the session is saved.
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    id: Option<i64>,
    name: String,
    date: Option<NaiveDate>,
    description: String,
    teacher: Option<Teacher>,
    users: Vec<User>,
    created_at: Option<NaiveDateTime>,
    updated_at: Option<NaiveDateTime>,
}

impl SessionBuilder {
    /// Sets the identifier.
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the session day.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the teacher running the session.
    pub fn teacher(mut self, teacher: Teacher) -> Self {
        self.teacher = Some(teacher);
        self
    }

    /// Sets the attending users, keeping their order.
    pub fn users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the last-update timestamp.
    pub fn updated_at(mut self, updated_at: NaiveDateTime) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Builds the session. Never fails.
    pub fn build(self) -> Session {
        Session {
            id: self.id,
            name: self.name,
            date: self.date,
            description: self.description,
            teacher: self.teacher,
            users: self.users,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
