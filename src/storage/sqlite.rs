//! SQLite storage implementation

use std::path::{Path, PathBuf};

use rusqlite::{Connection, params};
use tracing::debug;

use super::{ContactStore, schema};
use crate::Result;
use crate::contact::{Contact, NewContact};

/// SQLite-backed contact storage.
///
/// Holds only the file path: every operation opens its own connection and
/// drops it before returning, so nothing stays open between menu actions.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Point at a database file (created on first connection if missing)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Point at the file and make sure the schema exists
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(path);
        store.ensure_schema()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Run a query that yields contact rows
    fn query_contacts(&self, sql: &str, args: impl rusqlite::Params) -> Result<Vec<Contact>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(sql)?;
        let contacts = stmt
            .query_map(args, row_to_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(contacts)
    }
}

impl ContactStore for SqliteStore {
    fn ensure_schema(&self) -> Result<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        for stmt in schema::all_schema_statements() {
            tx.execute(stmt, [])?;
        }
        tx.commit()?;
        debug!(path = %self.path.display(), "contacts schema ready");
        Ok(())
    }

    fn add(&self, contact: &NewContact) -> Result<i64> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute(
            schema::INSERT_CONTACT,
            params![
                contact.name,
                contact.phone,
                contact.national_id,
                contact.address,
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        debug!(id, "contact inserted");
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<Contact>> {
        let contacts = self.query_contacts(schema::SELECT_ALL_CONTACTS, [])?;
        debug!(count = contacts.len(), "listed contacts");
        Ok(contacts)
    }

    fn search_by_name(&self, fragment: &str) -> Result<Vec<Contact>> {
        let pattern = format!("%{}%", fragment);
        let contacts = self.query_contacts(schema::SELECT_CONTACTS_BY_NAME, [&pattern])?;
        debug!(%fragment, count = contacts.len(), "searched contacts by name");
        Ok(contacts)
    }

    fn delete_by_id(&self, id: i64) -> Result<bool> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let removed = tx.execute(schema::DELETE_CONTACT, [id])?;
        tx.commit()?;
        debug!(id, removed, "delete by id");
        Ok(removed > 0)
    }
}

/// Helper to convert a row to a Contact
fn row_to_contact(row: &rusqlite::Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        phone: row.get(2)?,
        national_id: row.get(3)?,
        address: row.get(4)?,
    })
}
