use serde::{Deserialize, Serialize};

use crate::{Contact, Field, SortDirection};

/// The ordered collection of contacts backing one store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn position(&self, field: Field, value: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.get(field) == value)
    }

    pub fn find(&self, field: Field, value: &str) -> Option<&Contact> {
        self.position(field, value).map(|i| &self.contacts[i])
    }

    pub fn find_mut(&mut self, field: Field, value: &str) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.get(field) == value)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.position(Field::Name, name).is_some()
    }

    pub fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Removes the first contact with this exact name.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Contact> {
        let index = self.position(Field::Name, name)?;
        Some(self.contacts.remove(index))
    }

    /// Returns the contacts ordered by `field`. Equal values keep their
    /// relative order in both directions.
    pub fn sorted(&self, field: Field, direction: SortDirection) -> Vec<&Contact> {
        let mut sorted: Vec<&Contact> = self.contacts.iter().collect();
        match direction {
            SortDirection::Ascending => sorted.sort_by(|a, b| a.get(field).cmp(b.get(field))),
            SortDirection::Descending => sorted.sort_by(|a, b| b.get(field).cmp(a.get(field))),
        }
        sorted
    }
}

impl From<Vec<Contact>> for ContactBook {
    fn from(contacts: Vec<Contact>) -> Self {
        Self::from_contacts(contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ContactBook {
        ContactBook::from_contacts(vec![
            Contact::new("Carol", "33333333333", "same@example.com"),
            Contact::new("Alice", "11111111111", "alice@example.com"),
            Contact::new("Bob", "22222222222", "same@example.com"),
            Contact::new("Dave", "11111111111", "dave@example.com"),
        ])
    }

    fn names(contacts: &[&Contact]) -> Vec<String> {
        contacts.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_find_is_exact() {
        let book = sample();
        assert_eq!(book.find(Field::Name, "Bob").map(|c| c.phone.as_str()), Some("22222222222"));
        assert!(book.find(Field::Name, "bob").is_none());
        assert!(book.find(Field::Name, "Bob ").is_none());
        assert!(book.find(Field::Name, "Bo").is_none());
    }

    #[test]
    fn test_find_returns_first_match() {
        let book = sample();
        let found = book.find(Field::Email, "same@example.com");
        assert_eq!(found.map(|c| c.name.as_str()), Some("Carol"));
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let book = sample();
        assert_eq!(
            names(&book.sorted(Field::Name, SortDirection::Ascending)),
            vec!["Alice", "Bob", "Carol", "Dave"]
        );
        assert_eq!(
            names(&book.sorted(Field::Name, SortDirection::Descending)),
            vec!["Dave", "Carol", "Bob", "Alice"]
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let book = sample();
        // Alice and Dave share a phone; Carol and Bob share an email.
        assert_eq!(
            names(&book.sorted(Field::Phone, SortDirection::Ascending)),
            vec!["Alice", "Dave", "Bob", "Carol"]
        );
        assert_eq!(
            names(&book.sorted(Field::Phone, SortDirection::Descending)),
            vec!["Carol", "Bob", "Alice", "Dave"]
        );
        assert_eq!(
            names(&book.sorted(Field::Email, SortDirection::Descending)),
            vec!["Carol", "Bob", "Dave", "Alice"]
        );
    }

    #[test]
    fn test_toggle_twice_matches_ascending() {
        let book = sample();
        let dir = SortDirection::Ascending.toggled().toggled();
        assert_eq!(
            book.sorted(Field::Email, dir),
            book.sorted(Field::Email, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_sorting_does_not_reorder_book() {
        let book = sample();
        let before = book.clone();
        let _ = book.sorted(Field::Name, SortDirection::Descending);
        assert_eq!(book, before);
    }

    #[test]
    fn test_remove_by_name() {
        let mut book = sample();
        let removed = book.remove_by_name("Bob");
        assert_eq!(removed.map(|c| c.name), Some("Bob".to_string()));
        assert_eq!(book.len(), 3);
        assert!(book.remove_by_name("Bob").is_none());
        assert_eq!(book.len(), 3);
    }
}
