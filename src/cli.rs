pub mod command;
pub mod logging;
pub mod run;

pub use logging::init_logging;
pub use run::{command_line, run_app};
