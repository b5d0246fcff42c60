use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use contacts_types::ContactBook;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid contacts file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct Document {
    contacts: ContactBook,
}

/// A JSON file holding `{"contacts": [...]}`. Every write replaces the whole
/// file in place.
#[derive(Debug, Clone)]
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the collection, creating an empty store when the file is absent.
    pub fn load(&self) -> Result<ContactBook, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No contacts file at {}, creating one", self.path.display());
                let book = ContactBook::new();
                self.persist(&book)?;
                return Ok(book);
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let document: Document = serde_json::from_str(&content).map_err(|source| {
            StoreError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!(
            "Loaded {} contacts from {}",
            document.contacts.len(),
            self.path.display()
        );
        Ok(document.contacts)
    }

    pub fn persist(&self, book: &ContactBook) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let document = DocumentRef { contacts: book };
        let content = serde_json::to_string(&document).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))?;
        debug!("Wrote {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    contacts: &'a ContactBook,
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacts_types::Contact;

    fn jane() -> Contact {
        Contact::new("Jane Doe", "12345678901", "jane@example.com")
    }

    #[test]
    fn test_missing_file_creates_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let store = ContactStore::new(&path);

        let book = store.load().unwrap();
        assert!(book.is_empty());

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, serde_json::json!({ "contacts": [] }));
    }

    #[test]
    fn test_missing_parent_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContactStore::new(dir.path().join("nested").join("data.json"));
        assert!(store.load().unwrap().is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn test_persist_then_load_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContactStore::new(dir.path().join("data.json"));
        let book = ContactBook::from_contacts(vec![
            Contact::new("Zed", "99999999999", "zed@example.com"),
            jane(),
            Contact::new("Amy", "00000000000", "amy@example.com"),
        ]);

        store.persist(&book).unwrap();
        assert_eq!(store.load().unwrap(), book);
    }

    #[test]
    fn test_persist_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = ContactStore::new(dir.path().join("data.json"));

        store
            .persist(&ContactBook::from_contacts(vec![jane(), jane()]))
            .unwrap();
        store.persist(&ContactBook::new()).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_reads_document_written_by_hand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(
            &path,
            r#"{"contacts": [{"name": "Jane Doe", "phone": "12345678901", "email": "jane@example.com"}]}"#,
        )
        .unwrap();

        let book = ContactStore::new(&path).load().unwrap();
        assert_eq!(book.contacts(), &[jane()]);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{\"contacts\": [").unwrap();

        assert!(matches!(
            ContactStore::new(&path).load(),
            Err(StoreError::Json { .. })
        ));
    }
}
