//! CRUD and pagination queries for the contacts table

use sqlx::{Row, SqlitePool};

use contacts_core::{Contact, ContactInput, Error, PageRequest, Result};

/// Trait for contact database operations
#[allow(async_fn_in_trait)]
pub trait ContactOps {
    /// Get reference to the connection pool
    fn pool(&self) -> &SqlitePool;

    /// Insert a new contact and return it with its assigned id
    ///
    /// # Errors
    ///
    /// Returns [`Error::Duplicate`] if the phone number collides with an
    /// existing live contact, [`Error::Database`] on any other failure
    async fn create(&self, input: ContactInput) -> Result<Contact> {
        insert_contact(self.pool(), input).await
    }

    /// Look up a contact by id
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no row has that id
    async fn get_by_id(&self, id: i64) -> Result<Contact> {
        query_contact_by_id(self.pool(), id)
            .await?
            .ok_or(Error::not_found(id))
    }

    /// Replace the fields of the row matching `id`
    ///
    /// Existence is the service's responsibility; updating a missing id
    /// affects no rows and is not an error here.
    async fn update(&self, id: i64, input: ContactInput) -> Result<Contact> {
        update_contact(self.pool(), id, input).await
    }

    /// Remove the row matching `id`; idempotent at this layer
    async fn delete(&self, id: i64) -> Result<()> {
        delete_contact(self.pool(), id).await
    }

    /// Fetch the page slice plus the total live-row count
    ///
    /// The count and slice are independent reads, not a transaction;
    /// totals may lag the slice under concurrent writes.
    async fn get(&self, request: PageRequest) -> Result<(Vec<Contact>, u64)> {
        let total = count_contacts(self.pool()).await?;
        let records = query_contacts_page(self.pool(), request).await?;
        Ok((records, total))
    }
}

/// Insert a new contact into the database
async fn insert_contact(pool: &SqlitePool, input: ContactInput) -> Result<Contact> {
    let id = sqlx::query("INSERT INTO contacts (name, phone_number) VALUES (?, ?)")
        .bind(&input.name)
        .bind(&input.phone_number)
        .execute(pool)
        .await
        .map(|result| result.last_insert_rowid())
        .map_err(|e| classify_write_error(e, &input.phone_number))?;

    Ok(input.into_contact(id))
}

/// Query a contact by id
async fn query_contact_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Contact>> {
    sqlx::query("SELECT id, name, phone_number FROM contacts WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::database_error(format!("Failed to query contact: {e}")))
        .and_then(|opt_row| opt_row.map(parse_contact_row).transpose())
}

/// Replace name and phone number on the row matching `id`
async fn update_contact(pool: &SqlitePool, id: i64, input: ContactInput) -> Result<Contact> {
    sqlx::query("UPDATE contacts SET name = ?, phone_number = ? WHERE id = ?")
        .bind(&input.name)
        .bind(&input.phone_number)
        .bind(id)
        .execute(pool)
        .await
        .map_err(|e| classify_write_error(e, &input.phone_number))?;

    Ok(input.into_contact(id))
}

/// Delete the row matching `id`
async fn delete_contact(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("DELETE FROM contacts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| Error::database_error(format!("Failed to delete contact: {e}")))
}

/// Count all live contacts
async fn count_contacts(pool: &SqlitePool) -> Result<u64> {
    let count: i64 = sqlx::query("SELECT COUNT(*) AS total FROM contacts")
        .fetch_one(pool)
        .await
        .map_err(|e| Error::database_error(format!("Failed to count contacts: {e}")))?
        .try_get("total")
        .map_err(|e| Error::database_error(format!("Failed to read count: {e}")))?;

    Ok(count.unsigned_abs())
}

/// Query one page of contacts, ordered by id ascending so pagination is
/// deterministic across calls
async fn query_contacts_page(pool: &SqlitePool, request: PageRequest) -> Result<Vec<Contact>> {
    let rows = sqlx::query(
        "SELECT id, name, phone_number FROM contacts ORDER BY id ASC LIMIT ? OFFSET ?",
    )
    .bind(to_sql_i64(request.limit))
    .bind(to_sql_i64(request.offset()))
    .fetch_all(pool)
    .await
    .map_err(|e| Error::database_error(format!("Failed to query contacts: {e}")))?;

    rows.into_iter().map(parse_contact_row).collect()
}

/// Parse a database row into a `Contact`
fn parse_contact_row(row: sqlx::sqlite::SqliteRow) -> Result<Contact> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| Error::database_error(format!("Failed to read id: {e}")))?;
    let name: String = row
        .try_get("name")
        .map_err(|e| Error::database_error(format!("Failed to read name: {e}")))?;
    let phone_number: String = row
        .try_get("phone_number")
        .map_err(|e| Error::database_error(format!("Failed to read phone_number: {e}")))?;

    Ok(Contact {
        id,
        name,
        phone_number,
    })
}

/// Classify an insert/update failure by its typed cause: a unique
/// violation on the phone number becomes [`Error::Duplicate`], anything
/// else an opaque database error.
fn classify_write_error(err: sqlx::Error, phone_number: &str) -> Error {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            Error::duplicate(phone_number)
        }
        _ => Error::database_error(format!("Failed to write contact: {err}")),
    }
}

const fn to_sql_i64(value: u64) -> i64 {
    // SQLite binds are i64; saturate rather than wrap on absurd inputs
    if value > i64::MAX as u64 {
        i64::MAX
    } else {
        value as i64
    }
}
