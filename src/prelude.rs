pub use crate::cli::{command::Cli, init_logging, run_app};
pub use crate::domain::{
    command::Command,
    contact::{self, Contact, validate_phone_number},
    manager::{ContactStore, LoadOutcome},
};
pub use crate::errors::AppError;
pub use crate::store::{self, JsonStorage, MemStorage, Storage};
