//! Plain records handed to and returned by the store.
//!
//! Unlike the entity models, these carry their associations inline: a
//! [`Session`] holds its [`Teacher`] and its ordered list of [`User`]s. All
//! three compare and hash by identifier only.

mod session;
mod teacher;
mod user;

pub use session::{Session, SessionBuilder};
pub use teacher::Teacher;
pub use user::User;
