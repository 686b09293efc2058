pub mod json;
pub mod memory;

use crate::domain::Contact;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use json::JsonStorage;
pub use memory::MemStorage;

/// Backend that holds the persisted contact list.
///
/// `read` must report a missing store as an `AppError::Io` of kind
/// `NotFound` and an unreadable document as `AppError::Json`.
pub trait Storage {
    fn read(&self) -> Result<Vec<Contact>, AppError>;

    fn write(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn medium(&self) -> &str;
}

/// On-disk shape: `{"_contacts": [[name, phone], ...]}`
#[derive(Serialize)]
struct DocumentRef<'a> {
    #[serde(rename = "_contacts")]
    contacts: &'a [Contact],
}

#[derive(Deserialize)]
struct Document {
    #[serde(rename = "_contacts")]
    contacts: Vec<Contact>,
}

pub fn encode_contacts(contacts: &[Contact]) -> Result<String, AppError> {
    Ok(serde_json::to_string(&DocumentRef { contacts })?)
}

/// Decodes raw bytes; invalid UTF-8 is reported as `AppError::Json`.
pub fn decode_contacts(data: &[u8]) -> Result<Vec<Contact>, AppError> {
    let document: Document = serde_json::from_slice(data)?;
    Ok(document.contacts)
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
