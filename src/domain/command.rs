use super::*;

/// A parsed command line, program name already discarded.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `add <name...> <phone>`; the name may contain spaces.
    Add { name: String, phone: String },
    /// `del [<name...>]`
    Delete { name: Option<String> },
    /// `ls`
    List,
}

impl Command {
    /// Parses `<program> <subcommand> [<args>]`.
    ///
    /// The subcommand is split off at the first whitespace run, and for
    /// `add` the phone number is split off at the last one.
    pub fn parse(line: &str) -> Result<Self, AppError> {
        let line = line.trim();

        let Some((_program, rest)) = split_first(line) else {
            return Err(AppError::InvalidCommand(line.to_string()));
        };

        let (subcommand, args) = match split_first(rest) {
            Some((subcommand, args)) => (subcommand, Some(args)),
            None => (rest, None),
        };

        match subcommand {
            "add" => {
                let Some((name, phone)) = args.and_then(split_last) else {
                    return Err(AppError::InvalidCommand(rest.to_string()));
                };
                Ok(Command::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                })
            }
            "del" => Ok(Command::Delete {
                name: args.map(str::to_string),
            }),
            "ls" => match args {
                None => Ok(Command::List),
                Some(_) => Err(AppError::InvalidCommand(rest.to_string())),
            },
            other => Err(AppError::InvalidCommand(other.to_string())),
        }
    }
}

// Both helpers expect text without leading or trailing whitespace.

fn split_first(text: &str) -> Option<(&str, &str)> {
    let end = text.find(char::is_whitespace)?;
    Some((&text[..end], text[end..].trim_start()))
}

fn split_last(text: &str) -> Option<(&str, &str)> {
    let (idx, ws) = text.char_indices().rev().find(|(_, c)| c.is_whitespace())?;
    Some((text[..idx].trim_end(), &text[idx + ws.len_utf8()..]))
}
