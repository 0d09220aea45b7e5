//! Contacts backend service library.
//!
//! Layering follows request flow: HTTP boundary (`http`) → service
//! orchestration (`app`) → storage gateway (`db`). Each layer only adds
//! semantics; errors pass upward unchanged until the boundary maps them
//! to status codes.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app;
pub mod config;
pub mod db;
pub mod http;

pub use app::ContactService;
pub use config::Config;
pub use db::ContactDb;
