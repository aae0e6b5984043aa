//! In-memory contact store, used in place of SQLite by tests

use std::cell::{Cell, RefCell};

use super::ContactStore;
use crate::Result;
use crate::contact::{Contact, NewContact};

/// Keeps contacts in a `Vec`, assigning ids the way the SQLite table does.
#[derive(Debug)]
pub struct MemoryStore {
    rows: RefCell<Vec<Contact>>,
    next_id: Cell<i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            rows: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemoryStore {
    fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    fn add(&self, contact: &NewContact) -> Result<i64> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.rows.borrow_mut().push(contact.clone().into_contact(id));
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<Contact>> {
        Ok(self.rows.borrow().clone())
    }

    fn search_by_name(&self, fragment: &str) -> Result<Vec<Contact>> {
        let pattern: Vec<char> = format!("%{}%", fragment).chars().collect();
        Ok(self
            .rows
            .borrow()
            .iter()
            .filter(|c| like_matches(&pattern, &c.name.chars().collect::<Vec<_>>()))
            .cloned()
            .collect())
    }

    fn delete_by_id(&self, id: i64) -> Result<bool> {
        let mut rows = self.rows.borrow_mut();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok(rows.len() != before)
    }
}

/// SQLite `LIKE` without an ESCAPE clause: `%` matches any run of
/// characters, `_` exactly one, letters compare with ASCII case folding.
fn like_matches(pattern: &[char], text: &[char]) -> bool {
    let (mut p, mut t) = (0, 0);
    // Last `%` seen and the text position it is currently absorbing up to.
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match pattern.get(p) {
            Some('%') => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some(&c) if c == '_' || c.eq_ignore_ascii_case(&text[t]) => {
                p += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((star, absorbed)) => {
                    p = star + 1;
                    t = absorbed + 1;
                    backtrack = Some((star, t));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '%')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SqliteStore;

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.add(&NewContact::new("Ana", "1")).unwrap();
        assert!(store.delete_by_id(first).unwrap());
        let second = store.add(&NewContact::new("Bia", "2")).unwrap();
        assert!(second > first);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_search_folds_ascii_case() {
        let store = MemoryStore::new();
        store.add(&NewContact::new("Ana Silva", "1")).unwrap();
        assert_eq!(store.search_by_name("SILVA").unwrap().len(), 1);
        assert!(store.search_by_name("Souza").unwrap().is_empty());
    }

    #[test]
    fn test_like_wildcards() {
        let like = |pattern: &str, text: &str| {
            like_matches(
                &pattern.chars().collect::<Vec<_>>(),
                &text.chars().collect::<Vec<_>>(),
            )
        };
        assert!(like("%_%", "A"));
        assert!(!like("%_%", ""));
        assert!(like("%a_a%", "Ana Silva"));
        assert!(like("%N%V%", "Ana Silva"));
        assert!(!like("%v%n%", "Ana Silva"));
        assert!(like("%%", ""));
        assert!(!like("a_", "a"));
    }

    #[test]
    fn test_search_agrees_with_sqlite_like() {
        let dir = tempfile::tempdir().unwrap();
        let sqlite = SqliteStore::open(dir.path().join("agenda.db")).unwrap();
        let memory = MemoryStore::new();
        for (name, phone) in [("Ana Silva", "1"), ("Bo", "2"), ("100% Real", "3"), ("snake_case", "4")] {
            sqlite.add(&NewContact::new(name, phone)).unwrap();
            memory.add(&NewContact::new(name, phone)).unwrap();
        }

        for fragment in ["_", "%", "a_a", "n%v", "___", "0%", "e_c", "BO", "x", ""] {
            let ids = |hits: Vec<Contact>| hits.iter().map(|c| c.id).collect::<Vec<_>>();
            assert_eq!(
                ids(memory.search_by_name(fragment).unwrap()),
                ids(sqlite.search_by_name(fragment).unwrap()),
                "fragment {:?}",
                fragment
            );
        }
    }
}
