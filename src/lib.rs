//! # Agenda - Personal Contact Book
//!
//! A small contact manager backed by a single SQLite file.
//!
//! Agenda provides:
//! - A `Contact` record with optional national id and address
//! - A `ContactStore` trait with a file-backed SQLite implementation
//!   and an in-memory fake
//! - An interactive text menu to add, list, search and delete contacts

pub mod config;
pub mod contact;
pub mod shell;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use config::AgendaConfig;
pub use contact::{Contact, NewContact};
pub use shell::Shell;
pub use storage::{ContactStore, MemoryStore, SqliteStore};

/// Result type alias for Agenda operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Agenda operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
