use super::*;

use crate::store::{JsonStorage, Storage};
use tracing::{debug, warn};

/// Result of [`ContactStore::load`].
#[derive(Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The persisted list was read; holds the number of contacts.
    Loaded(usize),
    /// No persisted store existed, an empty one was written.
    Initialized,
    /// The persisted store could not be parsed and was replaced by an empty one.
    Recovered(String),
}

/// In-memory contact list, persisted in full after every mutation.
pub struct ContactStore<S: Storage = JsonStorage> {
    contacts: Vec<Contact>,
    storage: S,
}

impl ContactStore<JsonStorage> {
    pub fn new() -> Self {
        Self::with_storage(JsonStorage::default())
    }
}

impl Default for ContactStore<JsonStorage> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Storage> ContactStore<S> {
    pub fn with_storage(storage: S) -> Self {
        Self {
            contacts: Vec::new(),
            storage,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Empties the in-memory list. Nothing is persisted.
    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    /// Interprets a full command line such as `contacts add NAME 3344554433`.
    ///
    /// A rejected phone number on `add` is printed and swallowed; every
    /// other error is returned.
    pub fn run(&mut self, line: &str) -> Result<(), AppError> {
        let command = Command::parse(line)?;
        debug!(?command, "dispatching");

        match command {
            Command::Add { name, phone } => match self.add(&name, &phone) {
                Ok(()) => println!("Contact added"),
                Err(err @ AppError::InvalidPhoneNumber(_)) => {
                    warn!(%name, %phone, "rejected contact");
                    println!("{}", err);
                }
                Err(err) => return Err(err),
            },
            Command::Delete { name } => {
                let removed = self.delete(name.as_deref())?;
                println!("Removed {} contact(s)", removed);
            }
            Command::List => {
                let listing = self.list();
                if !listing.is_empty() {
                    println!("{}", listing);
                }
            }
        }
        Ok(())
    }

    pub fn add(&mut self, name: &str, phone: &str) -> Result<(), AppError> {
        validate_phone_number(phone)?;

        self.contacts.push(Contact::new(name, phone));
        self.save()
    }

    /// Removes every contact whose name is exactly `name` and returns how
    /// many went. The list is persisted even when nothing matched.
    pub fn delete(&mut self, name: Option<&str>) -> Result<usize, AppError> {
        let before = self.contacts.len();

        if let Some(name) = name {
            self.contacts.retain(|contact| contact.name != name);
        }

        self.save()?;
        Ok(before - self.contacts.len())
    }

    /// One `name phone` line per contact, no trailing newline.
    pub fn list(&self) -> String {
        self.contacts
            .iter()
            .map(Contact::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replaces the in-memory list with the persisted one.
    ///
    /// A missing or unparseable store is replaced with an empty one. Other
    /// I/O failures are returned and leave the list untouched.
    pub fn load(&mut self) -> Result<LoadOutcome, AppError> {
        match self.storage.read() {
            Ok(contacts) => {
                debug!(count = contacts.len(), medium = self.storage.medium(), "loaded contacts");
                self.contacts = contacts;
                Ok(LoadOutcome::Loaded(self.contacts.len()))
            }
            Err(err) if err.is_not_found() => {
                debug!(medium = self.storage.medium(), "no contact store yet, initializing");
                self.reset()?;
                Ok(LoadOutcome::Initialized)
            }
            Err(AppError::Json(err)) => {
                debug!(error = %err, "contact store unreadable, starting empty");
                self.reset()?;
                Ok(LoadOutcome::Recovered(err.to_string()))
            }
            Err(err) => Err(err),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.storage.write(&self.contacts)?;
        debug!(count = self.contacts.len(), medium = self.storage.medium(), "saved contacts");
        Ok(())
    }

    fn reset(&mut self) -> Result<(), AppError> {
        self.clear();
        self.save()
    }
}
