//! The `Contact` model and its inbound payload.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A persisted contact. The id is assigned by storage on create and is
/// immutable afterwards; `phone_number` is globally unique among live
/// contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
}

/// Inbound contact payload for create/update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
}

impl ContactInput {
    /// Check that both required fields are present and non-empty.
    ///
    /// Pure, runs once at the boundary before the service is invoked;
    /// the service never re-validates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::required("name"));
        }

        if self.phone_number.trim().is_empty() {
            return Err(Error::required("phone_number"));
        }

        Ok(())
    }

    /// Convert the payload into a model with the given id.
    pub fn into_contact(self, id: i64) -> Contact {
        Contact {
            id,
            name: self.name,
            phone_number: self.phone_number,
        }
    }
}
