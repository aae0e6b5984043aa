//! Contact types
//!
//! A `Contact` is a stored row; a `NewContact` is what the add operation
//! receives before the store assigns an id.

use std::fmt;

/// Placeholder shown for a missing national id or address.
pub const PLACEHOLDER: &str = "N/A";

/// A contact as persisted in the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Assigned by the store on insert, never changes
    pub id: i64,
    pub name: String,
    pub phone: String,
    /// `None` for NULL; may also be `Some("")` when added with an empty value
    pub national_id: Option<String>,
    pub address: Option<String>,
}

impl Contact {
    /// National id for display, `N/A` when null or empty.
    pub fn national_id_display(&self) -> &str {
        or_placeholder(self.national_id.as_deref())
    }

    /// Address for display, `N/A` when null or empty.
    pub fn address_display(&self) -> &str {
        or_placeholder(self.address.as_deref())
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Phone: {}, National ID: {}, Address: {}",
            self.id,
            self.name,
            self.phone,
            self.national_id_display(),
            self.address_display()
        )
    }
}

fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => PLACEHOLDER,
    }
}

/// Field values for a contact that has not been stored yet.
///
/// Optional fields are kept as plain strings: an empty string is persisted
/// as-is rather than as NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub national_id: String,
    pub address: String,
}

impl NewContact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            ..Default::default()
        }
    }

    pub fn with_national_id(mut self, national_id: impl Into<String>) -> Self {
        self.national_id = national_id.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Materialize as a stored contact under the given id.
    pub fn into_contact(self, id: i64) -> Contact {
        Contact {
            id,
            name: self.name,
            phone: self.phone,
            national_id: Some(self.national_id),
            address: Some(self.address),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_all_fields() {
        let contact = NewContact::new("Ana Silva", "11999990000")
            .with_national_id("123.456.789-00")
            .with_address("Rua A, 123")
            .into_contact(7);

        assert_eq!(
            contact.to_string(),
            "ID: 7, Name: Ana Silva, Phone: 11999990000, National ID: 123.456.789-00, Address: Rua A, 123"
        );
    }

    #[test]
    fn test_empty_and_null_render_as_placeholder() {
        let empty = NewContact::new("Ana Silva", "11999990000").into_contact(1);
        assert_eq!(empty.national_id.as_deref(), Some(""));
        assert_eq!(
            empty.to_string(),
            "ID: 1, Name: Ana Silva, Phone: 11999990000, National ID: N/A, Address: N/A"
        );

        let null = Contact {
            national_id: None,
            address: None,
            ..empty.clone()
        };
        assert_eq!(null.to_string(), empty.to_string());
    }
}
