use super::*;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

pub const STORAGE_PATH: &str = "./contacts.json";

pub struct JsonStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStorage {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }
}

impl Default for JsonStorage {
    fn default() -> Self {
        Self::at(STORAGE_PATH)
    }
}

impl Storage for JsonStorage {
    fn read(&self) -> Result<Vec<Contact>, AppError> {
        let data = fs::read(&self.path)?;
        decode_contacts(&data)
    }

    fn write(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let json_contacts = encode_contacts(contacts)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        file.write_all(json_contacts.as_bytes())?;
        Ok(())
    }

    fn medium(&self) -> &str {
        &self.medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_storage_is_persistent() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = JsonStorage::at(dir.path().join("contacts.json"));

        let contacts = vec![
            Contact::new("Mario Mario", "3344554433"),
            Contact::new("Luigi Mario", "3344554433"),
        ];

        storage.write(&contacts)?;
        assert_eq!(storage.read()?, contacts);

        // A shorter list must fully replace the previous content
        storage.write(&contacts[..1])?;
        assert_eq!(storage.read()?, vec![Contact::new("Mario Mario", "3344554433")]);

        Ok(())
    }

    #[test]
    fn missing_file_reports_not_found() -> Result<(), AppError> {
        let dir = tempdir()?;
        let storage = JsonStorage::at(dir.path().join("absent.json"));

        let err = storage.read().unwrap_err();
        assert!(err.is_not_found());
        Ok(())
    }

    #[test]
    fn creates_missing_parent_directories() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("deeper").join("contacts.json");
        let storage = JsonStorage::at(&path);

        storage.write(&[])?;

        assert_eq!(fs::read_to_string(&path)?, r#"{"_contacts":[]}"#);
        Ok(())
    }

    #[test]
    fn default_path_is_relative() {
        let storage = JsonStorage::default();

        assert_eq!(storage.path, PathBuf::from("./contacts.json"));
        assert_eq!(storage.medium(), "json");
    }
}
