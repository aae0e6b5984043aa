//! Database schema definitions

/// SQL to create the contacts table
pub const CREATE_CONTACTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    phone TEXT NOT NULL,
    national_id TEXT,
    address TEXT
)
"#;

pub const INSERT_CONTACT: &str =
    "INSERT INTO contacts (name, phone, national_id, address) VALUES (?1, ?2, ?3, ?4)";

pub const SELECT_ALL_CONTACTS: &str =
    "SELECT id, name, phone, national_id, address FROM contacts ORDER BY id";

pub const SELECT_CONTACTS_BY_NAME: &str =
    "SELECT id, name, phone, national_id, address FROM contacts WHERE name LIKE ?1 ORDER BY id";

pub const DELETE_CONTACT: &str = "DELETE FROM contacts WHERE id = ?1";

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_CONTACTS_TABLE]
}
