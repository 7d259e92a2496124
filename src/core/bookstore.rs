use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum BookStoreError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl BookStoreError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> BookStoreError {
        BookStoreError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_found(message: &str) -> BookStoreError {
        BookStoreError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> BookStoreError {
        BookStoreError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> BookStoreError {
        BookStoreError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> BookStoreError {
        BookStoreError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            BookStoreError::Database { retryable, .. } => { *retryable }
            BookStoreError::NotFound { .. } => { false }
            BookStoreError::Validation { .. } => { false }
            BookStoreError::Serialization { .. } => { false }
            BookStoreError::Runtime { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for BookStoreError {
    fn from(err: serde_json::Error) -> Self {
        BookStoreError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<String> for BookStoreError {
    fn from(err: String) -> Self {
        BookStoreError::serialization(
            format!("serde parsing {:?}", err).as_str())
    }
}

impl Display for BookStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BookStoreError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            BookStoreError::NotFound { message } => {
                write!(f, "{}", message)
            }
            BookStoreError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            BookStoreError::Serialization { message } => {
                write!(f, "{}", message)
            }
            BookStoreError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for Repository .
pub type BookStoreResult<T> = Result<T, BookStoreError>;
