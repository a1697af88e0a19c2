//! `partial-users` — the user directory record used by the demo driver.

pub mod user;

pub use user::{User, UserId};
