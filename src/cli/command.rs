use clap::Parser;

/// `--help` and `--version` are only recognized as the first argument.
/// Everything else, hyphenated tokens and `--` included, reaches the
/// command line untouched.
#[derive(Parser, Debug)]
#[command(name = "contacts", version, about = "Minimal contact book")]
pub struct Cli {
    /// Subcommand and its arguments: `add <name...> <phone>`, `del <name...>` or `ls`
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
