pub mod command;
pub mod contact;
pub mod manager;

use crate::errors::AppError;

pub use command::Command;
pub use contact::{Contact, validate_phone_number};
pub use manager::{ContactStore, LoadOutcome};
