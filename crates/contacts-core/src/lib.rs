//! Core domain for the contacts backend.
//!
//! Pure types only: the `Contact` model and its input DTO, field
//! validation, the pagination calculator, and the error taxonomy the
//! transport boundary maps to HTTP status codes. No I/O happens here.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod contact;
pub mod error;
pub mod paginate;

pub use contact::{Contact, ContactInput};
pub use error::{Error, Result};
pub use paginate::{Page, PageRequest};
