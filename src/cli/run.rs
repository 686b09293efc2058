use crate::{
    cli::command::Cli,
    domain::{ContactStore, LoadOutcome},
    errors::AppError,
};
use clap::Parser;
use tracing::{info, warn};

pub const PROGRAM_NAME: &str = "contacts";

/// Joins the program name and raw arguments with single spaces.
pub fn command_line(args: &[String]) -> String {
    std::iter::once(PROGRAM_NAME)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut store = ContactStore::new();

    match store.load()? {
        LoadOutcome::Loaded(count) => info!(count, "contact store loaded"),
        LoadOutcome::Initialized => info!("created empty contact store"),
        LoadOutcome::Recovered(reason) => {
            warn!(%reason, "discarded unreadable contact store")
        }
    }

    store.run(&command_line(&cli.args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_arguments_behind_program_name() {
        let cli = Cli::try_parse_from(["contacts", "add", "Princess Peach", "Toadstool", "+393339323323"])
            .unwrap();

        assert_eq!(
            command_line(&cli.args),
            "contacts add Princess Peach Toadstool +393339323323"
        );
    }

    #[test]
    fn hyphenated_tokens_reach_the_command_line() {
        let cli = Cli::try_parse_from(["contacts", "-x"]).unwrap();
        assert_eq!(command_line(&cli.args), "contacts -x");

        let cli = Cli::try_parse_from(["contacts", "del", "--", "x"]).unwrap();
        assert_eq!(command_line(&cli.args), "contacts del -- x");

        let cli = Cli::try_parse_from(["contacts", "add", "-Dash", "--frob", "123"]).unwrap();
        assert_eq!(command_line(&cli.args), "contacts add -Dash --frob 123");
    }

    #[test]
    fn bare_invocation_yields_program_name_only() {
        let cli = Cli::try_parse_from(["contacts"]).unwrap();

        assert!(cli.args.is_empty());
        assert_eq!(command_line(&cli.args), "contacts");
    }
}
