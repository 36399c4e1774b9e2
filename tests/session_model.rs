//! Equality, hashing, accessor and builder behavior of `Session`.

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, NaiveDateTime, Utc};
use yoga_sessions_seaorm_store::{Session, Teacher, User};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn fixture() -> (NaiveDate, NaiveDateTime) {
    let now = Utc::now().naive_utc();
    (now.date(), now)
}

fn session(id: i64, name: &str, description: &str) -> Session {
    let (date, now) = fixture();
    Session::new(
        Some(id),
        name,
        Some(date),
        description,
        None,
        Vec::new(),
        Some(now),
        Some(now),
    )
}

fn users() -> Vec<User> {
    vec![
        User::new(
            Some(1),
            "user1@test.com",
            "lastName1",
            "firstName1",
            "password123",
            false,
            None,
            None,
        ),
        User::new(
            Some(2),
            "user2@test.com",
            "lastName2",
            "firstName2",
            "password456",
            false,
            None,
            None,
        ),
    ]
}

#[test]
fn test_equals() {
    let session1 = session(1, "Session1", "Description1");
    let session2 = session(1, "Session1", "Description1");
    let session3 = session(2, "Session2", "Description2");

    assert_eq!(session1, session2);
    assert_ne!(session1, session3);
    assert!(!session1.equals(None));
    assert!(!session1.equals(Some(&"string" as &dyn Any)));
    assert!(session1.equals(Some(&session1 as &dyn Any)));
}

#[test]
fn test_equals_ignores_non_identifier_fields() {
    let (date, now) = fixture();
    let other_date = date.succ_opt().unwrap();
    let plain = session(5, "Session5", "Description5");
    let decorated = Session::new(
        Some(5),
        "Another name",
        Some(other_date),
        "Another description",
        Some(Teacher::default()),
        users(),
        None,
        Some(now),
    );

    assert_eq!(plain, decorated);
    assert_eq!(hash_of(&plain), hash_of(&decorated));
}

#[test]
fn test_hash_code() {
    let session1 = session(1, "Session1", "Description1");
    let session2 = session(1, "Session1", "Description1");
    let session3 = session(2, "Session2", "Description2");

    assert_eq!(hash_of(&session1), hash_of(&session2));
    assert_ne!(hash_of(&session1), hash_of(&session3));
}

#[test]
fn test_hash_set_deduplicates_by_identifier() {
    let set: HashSet<Session> = [
        session(1, "Session1", "Description1"),
        session(1, "Renamed", "Changed"),
        session(2, "Session2", "Description2"),
    ]
    .into_iter()
    .collect();

    assert_eq!(set.len(), 2);
}

#[test]
fn test_setters() {
    let mut session = Session::default();
    let (date, now) = fixture();
    let teacher = Teacher::default();
    let users = users();

    session.set_id(Some(1));
    session.set_name("Session1");
    session.set_date(Some(date));
    session.set_description("Description1");
    session.set_teacher(Some(teacher.clone()));
    session.set_users(users.clone());
    session.set_created_at(Some(now));
    session.set_updated_at(Some(now));

    assert_eq!(session.id(), Some(1));
    assert_eq!(session.name(), "Session1");
    assert_eq!(session.date(), Some(date));
    assert_eq!(session.description(), "Description1");
    assert_eq!(session.teacher(), Some(&teacher));
    assert_eq!(session.users(), users.as_slice());
    assert_eq!(session.created_at(), Some(now));
    assert_eq!(session.updated_at(), Some(now));
}

#[test]
fn test_can_equal() {
    let session1 = session(1, "Session1", "Description1");
    let session2 = session(1, "Session1", "Description1");
    let session3 = session(2, "Session2", "Description2");

    assert!(session1.can_equal(&session2));
    assert!(session1.can_equal(&session3));
    assert!(!session1.can_equal(&"string"));
    assert!(!session1.can_equal(&Teacher::default()));
}

#[test]
fn test_builder() {
    let (date, now) = fixture();
    let teacher = Teacher::new(Some(3), "Doe", "John", Some(now), Some(now));
    let users = users();

    let session = Session::builder()
        .id(1)
        .name("Session1")
        .date(date)
        .description("Description1")
        .teacher(teacher.clone())
        .users(users.clone())
        .created_at(now)
        .updated_at(now)
        .build();

    assert_eq!(session.id(), Some(1));
    assert_eq!(session.name(), "Session1");
    assert_eq!(session.date(), Some(date));
    assert_eq!(session.description(), "Description1");
    assert_eq!(session.teacher(), Some(&teacher));
    assert_eq!(session.users(), users.as_slice());
    assert_eq!(session.created_at(), Some(now));
    assert_eq!(session.updated_at(), Some(now));
}

#[test]
fn test_builder_matches_constructor() {
    let (date, now) = fixture();
    let teacher = Teacher::new(Some(3), "Doe", "John", None, None);

    let built = Session::builder()
        .updated_at(now)
        .users(users())
        .description("Description1")
        .id(1)
        .teacher(teacher.clone())
        .created_at(now)
        .date(date)
        .name("Session1")
        .build();
    let constructed = Session::new(
        Some(1),
        "Session1",
        Some(date),
        "Description1",
        Some(teacher),
        users(),
        Some(now),
        Some(now),
    );

    assert_eq!(built.id(), constructed.id());
    assert_eq!(built.name(), constructed.name());
    assert_eq!(built.date(), constructed.date());
    assert_eq!(built.description(), constructed.description());
    assert_eq!(built.teacher(), constructed.teacher());
    assert_eq!(built.users(), constructed.users());
    assert_eq!(built.created_at(), constructed.created_at());
    assert_eq!(built.updated_at(), constructed.updated_at());
}

#[test]
fn test_empty_builder_matches_default() {
    let built = Session::builder().build();

    assert_eq!(built.id(), None);
    assert_eq!(built.name(), "");
    assert_eq!(built.date(), None);
    assert!(built.teacher().is_none());
    assert!(built.users().is_empty());
    assert_eq!(built, Session::default());
}

#[test]
fn test_equals_and_hash_code_edge_cases() {
    let mut session1 = Session::default();
    let mut session2 = Session::default();

    // Both sessions are new and have no id
    assert_eq!(session1, session2);
    assert_eq!(hash_of(&session1), hash_of(&session2));

    // One session has an id, the other does not
    session1.set_id(Some(1));
    assert_ne!(session1, session2);
    assert_ne!(hash_of(&session1), hash_of(&session2));

    // Both sessions have the same id
    session2.set_id(Some(1));
    assert_eq!(session1, session2);
    assert_eq!(hash_of(&session1), hash_of(&session2));

    // Different ids
    session2.set_id(Some(2));
    assert_ne!(session1, session2);
    assert_ne!(hash_of(&session1), hash_of(&session2));
}

#[test]
fn test_teacher_and_user_compare_by_identifier() {
    let teacher_a = Teacher::new(Some(1), "Doe", "John", None, None);
    let teacher_b = Teacher::new(Some(1), "Smith", "Jane", None, None);
    assert_eq!(teacher_a, teacher_b);
    assert_ne!(teacher_a, Teacher::default());

    let [user_a, user_b]: [User; 2] = users().try_into().unwrap();
    assert_ne!(user_a, user_b);
    let mut renamed = user_a.clone();
    renamed.first_name = "Renamed".into();
    assert_eq!(user_a, renamed);
    assert_eq!(hash_of(&user_a), hash_of(&renamed));
}
