use contacts::prelude::{init_logging, run_app};
use std::process::exit;

fn main() {
    init_logging();

    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        exit(1);
    }
}
