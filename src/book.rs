use std::fmt;

/// A single entry of the contact table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phone)
    }
}

/// In-memory contact table mapping a name to a phone number.
///
/// Names are unique, case-sensitive keys; listing preserves insertion order.
/// The table is owned by whoever drives the interpreter and lives for one run
/// of the process. Entries are only ever introduced through [`add`] and
/// updated through [`add`] or [`change`]; there is no removal.
///
/// [`add`]: ContactBook::add
/// [`change`]: ContactBook::change
#[derive(Debug, Default)]
pub struct ContactBook {
    entries: Vec<Contact>,
}

impl ContactBook {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a contact, overwriting the phone number if the name is taken.
    pub fn add(&mut self, name: impl Into<String>, phone: impl Into<String>) {
        let name = name.into();
        let phone = phone.into();
        match self.entries.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.phone = phone,
            None => self.entries.push(Contact { name, phone }),
        }
    }

    /// Update the phone number of an existing contact.
    ///
    /// Returns `false` and leaves the table untouched when the name is absent.
    pub fn change(&mut self, name: &str, phone: impl Into<String>) -> bool {
        match self.entries.iter_mut().find(|c| c.name == name) {
            Some(existing) => {
                existing.phone = phone.into();
                true
            }
            None => false,
        }
    }

    /// Look up the phone number stored under `name`.
    pub fn phone(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.phone.as_str())
    }

    /// Iterate over the contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_lookup() {
        let mut book = ContactBook::new();
        book.add("Alice", "111");

        assert_eq!(book.phone("Alice"), Some("111"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_overwrites_existing_name() {
        let mut book = ContactBook::new();
        book.add("Alice", "111");
        book.add("Alice", "999");

        assert_eq!(book.phone("Alice"), Some("999"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_change_missing_name_leaves_table_unchanged() {
        let mut book = ContactBook::new();
        book.add("Alice", "111");

        assert!(!book.change("Bob", "222"));
        assert_eq!(book.phone("Alice"), Some("111"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_change_existing_name() {
        let mut book = ContactBook::new();
        book.add("Alice", "111");

        assert!(book.change("Alice", "222"));
        assert_eq!(book.phone("Alice"), Some("222"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut book = ContactBook::new();
        book.add("Bob", "1");

        assert_eq!(book.phone("bob"), None);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut book = ContactBook::new();
        book.add("B", "2");
        book.add("A", "1");
        book.add("C", "3");
        // overwriting must not move the entry to the back
        book.add("B", "22");

        let names: Vec<&str> = book.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }
}
