use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    // Borrowing an already-borrowed item or returning an item that is not
    // checked out. The catalog state is left untouched.
    InvalidState {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Conversion {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn invalid_state(message: &str) -> LibraryError {
        LibraryError::InvalidState { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn conversion(message: &str) -> LibraryError {
        LibraryError::Conversion { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {:?}", err).as_str(), None)
    }
}

impl From<std::num::ParseIntError> for LibraryError {
    fn from(err: std::num::ParseIntError) -> Self {
        LibraryError::conversion(
            format!("integer parsing {:?}", err).as_str())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::InvalidState { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Conversion { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for catalog and roster operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum ItemStatus {
    Available,
    Borrowed,
}

impl From<String> for ItemStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Borrowed" => ItemStatus::Borrowed,
            _ => ItemStatus::Available,
        }
    }
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ItemStatus::Available => write!(f, "Available"),
            ItemStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{ItemStatus, LibraryError};

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_invalid_state_error() {
        assert!(matches!(LibraryError::invalid_state("test"), LibraryError::InvalidState{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_conversion_error() {
        assert!(matches!(LibraryError::conversion("test"), LibraryError::Conversion{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_convert_parse_error() {
        let err = "abc".parse::<i32>().unwrap_err();
        assert!(matches!(LibraryError::from(err), LibraryError::Conversion{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_format_item_status() {
        let statuses = vec![
            ItemStatus::Available,
            ItemStatus::Borrowed,
        ];
        for status in statuses {
            let str = status.to_string();
            let str_status = ItemStatus::from(str);
            assert_eq!(status, str_status);
        }
    }
}
