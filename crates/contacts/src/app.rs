//! Contact service: orchestrates CRUD over the storage gateway.
//!
//! Mutations are existence-check-first: update and delete call
//! `get_by_id` before writing and propagate its error unchanged, so
//! "mutate missing id" surfaces the exact same `NotFound` a plain
//! lookup would, and no write is attempted. No retries; a storage
//! failure is surfaced immediately.

use contacts_core::{Contact, ContactInput, Page, PageRequest, Result};

use crate::db::ContactDb;

/// Stateless, request-scoped orchestration over an injected [`ContactDb`].
#[derive(Clone)]
pub struct ContactService {
    db: ContactDb,
}

impl ContactService {
    /// Build a service around an explicitly constructed storage handle.
    pub const fn new(db: ContactDb) -> Self {
        Self { db }
    }

    /// Create a contact. No existence check is needed for a new entity.
    ///
    /// # Errors
    ///
    /// Returns `Error::Duplicate` on a phone-number collision,
    /// `Error::Database` on any other storage failure
    pub async fn create(&self, input: ContactInput) -> Result<Contact> {
        self.db.create(input).await
    }

    /// Look up a contact by id.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` distinctly from other storage failures
    pub async fn get_by_id(&self, id: i64) -> Result<Contact> {
        self.db.get_by_id(id).await
    }

    /// Update a contact. The lookup must succeed before the write is
    /// attempted; its error propagates unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the id does not exist,
    /// `Error::Duplicate`/`Error::Database` from the write
    pub async fn update(&self, id: i64, input: ContactInput) -> Result<Contact> {
        self.get_by_id(id).await?;
        self.db.update(id, input).await
    }

    /// Delete a contact, existence-check-first like [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the id does not exist,
    /// `Error::Database` if the delete fails
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.get_by_id(id).await?;
        self.db.delete(id).await
    }

    /// Paginated listing. Normalizes page/limit defaults, then assembles
    /// the page from the gateway's slice and independent total count.
    ///
    /// # Errors
    ///
    /// Returns `Error::Database` if either query fails
    pub async fn get(&self, request: PageRequest) -> Result<Page<Contact>> {
        let request = request.normalized();
        let (records, total) = self.db.get(request).await?;
        Ok(Page::assemble(request, records, total))
    }
}
