//! Storage Layer - contact persistence
//!
//! System of record is a single SQLite file with one table:
//! - contacts(id, name, phone, national_id, address)
//!
//! The shell only talks to the `ContactStore` trait so tests can swap in
//! `MemoryStore`.

pub mod memory;
pub mod schema;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::Result;
use crate::contact::{Contact, NewContact};

/// Operations the shell needs from a contact store.
pub trait ContactStore {
    /// Create the `contacts` table if it does not exist. Idempotent.
    fn ensure_schema(&self) -> Result<()>;

    /// Insert a contact and return the id assigned to it.
    fn add(&self, contact: &NewContact) -> Result<i64>;

    /// All contacts, ascending by id.
    fn list_all(&self) -> Result<Vec<Contact>>;

    /// Contacts whose name contains `fragment`, ASCII case-insensitive.
    fn search_by_name(&self, fragment: &str) -> Result<Vec<Contact>>;

    /// Remove the contact with `id`. Returns false when no row matched.
    fn delete_by_id(&self, id: i64) -> Result<bool>;
}

impl<S: ContactStore + ?Sized> ContactStore for &S {
    fn ensure_schema(&self) -> Result<()> {
        (**self).ensure_schema()
    }

    fn add(&self, contact: &NewContact) -> Result<i64> {
        (**self).add(contact)
    }

    fn list_all(&self) -> Result<Vec<Contact>> {
        (**self).list_all()
    }

    fn search_by_name(&self, fragment: &str) -> Result<Vec<Contact>> {
        (**self).search_by_name(fragment)
    }

    fn delete_by_id(&self, id: i64) -> Result<bool> {
        (**self).delete_by_id(id)
    }
}
