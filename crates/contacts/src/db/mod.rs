//! Contact persistence using `SQLx`
//!
//! Async SQLite-based persistence with:
//! - Connection pooling (no Arc<Mutex<>>)
//! - Zero unwraps, zero panics
//! - Simple embedded schema (no migration files)
//!
//! The handle is constructed explicitly at startup and injected into the
//! service; there is no process-wide singleton.

use std::path::Path;

use sqlx::SqlitePool;

use contacts_core::{Contact, ContactInput, PageRequest, Result};

mod contact_ops;
mod schema;

pub use contact_ops::ContactOps;

/// Database wrapper for contact storage with connection pooling.
///
/// `Clone` clones the pool reference; one handle is shared safely by
/// concurrent requests.
#[derive(Clone)]
pub struct ContactDb {
    pool: SqlitePool,
}

impl ContactDb {
    /// Create or open the contact database, ensuring the table exists
    ///
    /// # Errors
    ///
    /// Returns `Error::Database` if the file cannot be opened or schema
    /// initialization fails
    pub async fn create_or_open(path: &Path) -> Result<Self> {
        let db_url = format!("sqlite:{}?mode=rwc", path.display());

        let pool = schema::create_connection_pool(&db_url).await?;
        schema::init_schema(&pool).await?;
        Ok(Self { pool })
    }
}

// Implement contact operations trait
impl ContactOps for ContactDb {
    fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// Forward public methods to trait implementations
impl ContactDb {
    /// Insert a new contact, returning it with its assigned id
    ///
    /// # Errors
    ///
    /// Returns `Error::Duplicate` if the phone number already exists,
    /// `Error::Database` on any other failure
    pub async fn create(&self, input: ContactInput) -> Result<Contact> {
        <Self as ContactOps>::create(self, input).await
    }

    /// Look up a contact by id
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` when no row has that id
    pub async fn get_by_id(&self, id: i64) -> Result<Contact> {
        <Self as ContactOps>::get_by_id(self, id).await
    }

    /// Replace the fields of the contact matching `id`
    ///
    /// # Errors
    ///
    /// Returns `Error::Duplicate` on a phone-number collision,
    /// `Error::Database` on any other failure
    pub async fn update(&self, id: i64, input: ContactInput) -> Result<Contact> {
        <Self as ContactOps>::update(self, id, input).await
    }

    /// Remove the contact matching `id`; idempotent at this layer
    ///
    /// # Errors
    ///
    /// Returns `Error::Database` if the delete fails
    pub async fn delete(&self, id: i64) -> Result<()> {
        <Self as ContactOps>::delete(self, id).await
    }

    /// Fetch one page of contacts plus the total live-row count
    ///
    /// # Errors
    ///
    /// Returns `Error::Database` if either query fails
    pub async fn get(&self, request: PageRequest) -> Result<(Vec<Contact>, u64)> {
        <Self as ContactOps>::get(self, request).await
    }
}
