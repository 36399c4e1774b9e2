//! Database entity models for yoga-sessions-seaorm-store.
//!
//! This module contains the Sea-ORM entity definitions backing the session
//! store. They mirror the relational schema created by the bundled migration
//! and are converted into the plain records of [`crate::model`] when loaded.
//!
//! The primary entity is `session`; `teacher` and `user` are referenced by it,
//! and `participate` is the join table linking sessions to their users.

/// Join table between sessions and the users attending them.
pub mod participate;

/// Session entity model for Sea-ORM database interaction.
///
/// Contains the database schema representation of a scheduled yoga session.
pub mod session;

/// Teacher entity model. A session references at most one teacher.
pub mod teacher;

/// User entity model. Users attend sessions through `participate`.
pub mod user;
