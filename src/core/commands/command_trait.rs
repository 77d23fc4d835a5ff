// src/core/commands/command_trait.rs

//! Defines the capability contract every command implements.

use crate::core::{Output, TracelinkError};
use async_trait::async_trait;

/// A named, self-validating unit of executable behavior.
///
/// Every command offers two execution paths over the same side effect:
/// `execute` fails loud for interactive use, while `serializable_execute` is
/// total over [`Output`] for batch/programmatic use. Implementations route
/// both paths through one inner function so the side effect cannot diverge;
/// only the error surfacing differs.
#[async_trait]
pub trait Command: Send + Sync {
    /// Stable identifier, unique within a registry, used for lookup and help
    /// listings. Matching is exact and case-sensitive.
    fn name(&self) -> &'static str;

    /// Whether the command can currently be meaningfully executed. Advisory:
    /// dispatch checks it before executing, but `execute` must still cope
    /// with being called while unavailable.
    fn is_available(&self) -> bool {
        true
    }

    /// Checks the argument list, writing exactly one diagnostic line through
    /// the client writer when invalid. Never errors for well-formed but
    /// semantically wrong input. Callers must not execute on `false`.
    fn validate(&self, args: &[String]) -> bool;

    /// Validation as a control-flow error, for callers that want one. Emits
    /// the same diagnostic as [`Command::validate`].
    fn validate_strict(&self, args: &[String]) -> Result<(), TracelinkError> {
        if self.validate(args) {
            Ok(())
        } else {
            Err(TracelinkError::FailedValidation(format!(
                "invalid arguments to '{}'",
                self.name()
            )))
        }
    }

    /// Performs the side effect and writes human-readable output. Transport
    /// and domain errors propagate to the caller.
    async fn execute(&self, args: &[String]) -> Result<(), TracelinkError>;

    /// Performs the same side effect but never lets an error escape: detected
    /// business failures become `Output::Failure`, raised errors become
    /// `Output::Exception`, queries answer with `Output::StringPayload`.
    async fn serializable_execute(&self, args: &[String]) -> Output;
}

impl std::fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command").field("name", &self.name()).finish()
    }
}
