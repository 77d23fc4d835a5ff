// src/core/errors.rs

//! Defines the primary error type for the entire application.

use thiserror::Error;

/// The main error enum, representing all possible failures within the client.
/// Using `thiserror` allows for clean error definitions and automatic `From` trait implementations.
#[derive(Error, Debug)]
pub enum TracelinkError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Command '{0}' is already registered")]
    DuplicateCommand(String),

    #[error("Failed validation: {0}")]
    FailedValidation(String),

    #[error("Not connected to a remote target")]
    NotConnected,

    #[error("Host resolution failed: {0}")]
    HostResolution(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Remote operation timed out: {0}")]
    Timeout(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TracelinkError {
    /// Splits the error into the `(type name, message)` pair used by the
    /// serializable output protocol. The message is carried verbatim; in
    /// particular an empty resolution message stays empty so the rendered
    /// payload is `"HostResolutionError: "`.
    pub fn exception_parts(&self) -> (&'static str, String) {
        match self {
            TracelinkError::Io(e) => ("IoError", e.to_string()),
            TracelinkError::UnknownCommand(name) => ("UnknownCommandError", name.clone()),
            TracelinkError::DuplicateCommand(name) => ("DuplicateCommandError", name.clone()),
            TracelinkError::FailedValidation(msg) => ("FailedValidationError", msg.clone()),
            TracelinkError::NotConnected => ("NotConnectedError", String::new()),
            TracelinkError::HostResolution(msg) => ("HostResolutionError", msg.clone()),
            TracelinkError::Connection(msg) => ("ConnectionError", msg.clone()),
            TracelinkError::Timeout(msg) => ("TimeoutError", msg.clone()),
            TracelinkError::Serialization(msg) => ("SerializationError", msg.clone()),
        }
    }
}

// --- From trait implementations for easy error conversion ---

impl From<serde_json::Error> for TracelinkError {
    fn from(e: serde_json::Error) -> Self {
        TracelinkError::Serialization(e.to_string())
    }
}
