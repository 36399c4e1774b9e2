//! # Yoga Session Store for Sea-ORM
//!
//! Persistence for the sessions of a yoga studio booking application, built
//! on [Sea-ORM](https://crates.io/crates/sea-orm).
//!
//! A [`Session`] is a plain record: a name, a date, a description, the
//! [`Teacher`] running it and the [`User`]s attending it. Sessions compare and
//! hash by identifier only, so a session read back from the database equals
//! the one that was saved even after other fields change.
//!
//! ## Features
//!
//! - Id-based equality and hashing for sessions, teachers and users
//! - A builder for assembling sessions field by field
//! - CRUD operations plus join/leave for session participants
//! - Automatic `created_at` / `updated_at` stamping
//! - A bundled migration creating the schema (feature `migration`)
//! - PostgreSQL (feature `postgres`, default) or SQLite (feature `sqlite`)
//!
//! ## Quick Start
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use yoga_sessions_seaorm_store::{DatabaseConfig, Session, SessionStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads DATABASE_URL (and a .env file if present)
//! let conn = DatabaseConfig::from_env().connect().await?;
//! let store = SessionStore::new(conn);
//!
//! let session = Session::builder()
//!     .name("Sunrise flow")
//!     .date(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
//!     .description("One hour of gentle vinyasa")
//!     .build();
//!
//! let saved = store.create(&session).await?;
//! store.participate(saved.id().unwrap(), 42).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Schema Setup
//!
//! ```no_run
//! # #[cfg(feature = "migration")]
//! # async fn example(conn: sea_orm::DatabaseConnection) -> Result<(), sea_orm::DbErr> {
//! use yoga_sessions_seaorm_store::migration::{Migrator, MigratorTrait};
//!
//! Migrator::up(&conn, None).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dto;
pub mod entity;
pub mod error;
#[cfg(feature = "migration")]
pub mod migration;
pub mod model;
mod session_store;

/// The Sea-ORM store for sessions.
///
/// See [`SessionStore`] documentation for usage details.
pub use session_store::SessionStore;

pub use config::DatabaseConfig;
pub use dto::SessionDto;
pub use error::{StoreError, StoreResult};
pub use model::{Session, SessionBuilder, Teacher, User};
