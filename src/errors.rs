use core::fmt;

#[derive(Debug)]
pub enum AppError {
    InvalidPhoneNumber(String),
    InvalidCommand(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    Regex(regex::Error),
}

impl AppError {
    /// True when the error is an I/O failure caused by a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::InvalidPhoneNumber(phone) => {
                write!(f, "Invalid phone number: {}", phone)
            }
            AppError::InvalidCommand(cmd) => {
                write!(f, "Invalid command: {}", cmd)
            }
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Malformed contact data: {}", e)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid pattern: {}", e)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Regex(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_invalid_phone_message() {
        let err = AppError::InvalidPhoneNumber("InvalidString".to_string());

        assert_eq!(format!("{}", err), "Invalid phone number: InvalidString");
    }

    #[test]
    fn confirm_invalid_command_message() {
        let err = AppError::InvalidCommand("frobnicate".to_string());

        assert_eq!(format!("{}", err), "Invalid command: frobnicate");
    }

    #[test]
    fn detects_missing_file() {
        let missing = AppError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        let denied = AppError::from(std::io::Error::from(std::io::ErrorKind::PermissionDenied));

        assert!(missing.is_not_found());
        assert!(!denied.is_not_found());
        assert!(!AppError::InvalidCommand("x".to_string()).is_not_found());
    }

    #[test]
    fn wraps_json_error_as_source() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(parse_err);

        assert!(format!("{}", err).starts_with("Malformed contact data: "));
        assert!(std::error::Error::source(&err).is_some());
    }
}
