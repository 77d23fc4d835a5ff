// src/core/protocol/output.rs

//! Defines the tagged result value returned by the serializable execution path.

use crate::core::TracelinkError;
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

/// The outcome of a serializable command execution.
///
/// Exactly one variant is produced per execution. Business-level negative
/// results are `Failure`; raised errors are converted into `Exception`; query
/// commands answer with a `StringPayload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// The command completed and has no payload to report.
    Success,
    /// The command detected a business-level failure (e.g. "not found").
    Failure(String),
    /// An error escaped the command's execution and was captured.
    Exception { kind: String, message: String },
    /// The command is a query and this is its answer.
    StringPayload(String),
}

impl Output {
    /// Builds an `Exception` output from an error, carrying the error's type
    /// name and verbatim message.
    pub fn exception(err: &TracelinkError) -> Self {
        let (kind, message) = err.exception_parts();
        Output::Exception {
            kind: kind.to_string(),
            message,
        }
    }

    /// The wire tag for this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Output::Success => "success",
            Output::Failure(_) => "failure",
            Output::Exception { .. } => "exception",
            Output::StringPayload(_) => "string",
        }
    }

    /// The string payload of this result. Defined for every variant; `Success`
    /// carries an empty payload, and an `Exception` renders as
    /// `"<Kind>: <message>"` with the message preserved verbatim even when
    /// empty.
    pub fn payload(&self) -> String {
        match self {
            Output::Success => String::new(),
            Output::Failure(msg) => msg.clone(),
            Output::Exception { kind, message } => format!("{kind}: {message}"),
            Output::StringPayload(value) => value.clone(),
        }
    }
}

/// Serializes to the flat `{kind, payload}` surface consumed by batch callers.
impl Serialize for Output {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Output", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("payload", &self.payload())?;
        state.end()
    }
}
