use super::*;

use core::fmt;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Optional leading `+`, then at least three digits, nothing else.
pub const PHONE_PATTERN: &str = r"^[+]?[0-9]{3,}$";

/// A stored (name, phone) pair.
///
/// Persisted as a two element JSON array `[name, phone]`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Contact {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.phone)
    }
}

impl Serialize for Contact {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&self.name, &self.phone).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Contact {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (name, phone) = <(String, String)>::deserialize(deserializer)?;
        Ok(Contact { name, phone })
    }
}

pub fn validate_phone_number(phone: &str) -> Result<(), AppError> {
    let re = Regex::new(PHONE_PATTERN)?;
    if re.is_match(phone) {
        Ok(())
    } else {
        Err(AppError::InvalidPhoneNumber(phone.to_string()))
    }
}
