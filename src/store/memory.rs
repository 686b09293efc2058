use super::*;

use std::cell::{Cell, RefCell};
use std::io;

/// Volatile backend. `None` behaves like a store that was never written.
pub struct MemStorage {
    data: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            data: RefCell::new(None),
            writes: Cell::new(0),
        }
    }

    /// Seeds the raw persisted document, bypassing encoding.
    pub fn with_raw(data: &str) -> Self {
        let storage = Self::new();
        *storage.data.borrow_mut() = Some(data.to_string());
        storage
    }

    pub fn raw(&self) -> Option<String> {
        self.data.borrow().clone()
    }

    /// Number of completed writes.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemStorage {
    fn read(&self) -> Result<Vec<Contact>, AppError> {
        match self.data.borrow().as_deref() {
            Some(data) => decode_contacts(data.as_bytes()),
            None => Err(AppError::Io(io::Error::from(io::ErrorKind::NotFound))),
        }
    }

    fn write(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let encoded = encode_contacts(contacts)?;
        *self.data.borrow_mut() = Some(encoded);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn medium(&self) -> &str {
        "mem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_missing_store() {
        let storage = MemStorage::new();

        assert!(storage.read().unwrap_err().is_not_found());
        assert_eq!(storage.writes(), 0);
        assert_eq!(storage.raw(), None);
    }

    #[test]
    fn keeps_last_write() -> Result<(), AppError> {
        let storage = MemStorage::new();

        storage.write(&[Contact::new("A", "111")])?;
        storage.write(&[Contact::new("B", "222")])?;

        assert_eq!(storage.read()?, vec![Contact::new("B", "222")]);
        assert_eq!(storage.writes(), 2);
        Ok(())
    }
}
