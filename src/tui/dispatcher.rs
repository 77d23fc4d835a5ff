// src/tui/dispatcher.rs

//! The dispatch path shared by the interactive and batch executors:
//! resolve, check availability, validate, run. The two front-ends differ
//! only in I/O shape and error surfacing.

use super::writer::ClientWriter;
use crate::core::commands::CommandRegistry;
use crate::core::{Output, TracelinkError};
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
    cw: ClientWriter,
}

impl Dispatcher {
    pub fn new(registry: Arc<CommandRegistry>, cw: ClientWriter) -> Self {
        Self { registry, cw }
    }

    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    /// Interactive dispatch. An unknown or unavailable command and a failed
    /// validation are reported through the writer and end the dispatch
    /// without error; an error raised by the command itself is returned so
    /// the shell can print it and keep its loop going.
    pub async fn execute(&self, name: &str, args: &[String]) -> Result<(), TracelinkError> {
        let command = match self.registry.resolve(name) {
            Ok(command) => command,
            Err(e) => {
                self.cw.println(&e.to_string());
                return Ok(());
            }
        };
        if !command.is_available() {
            self.cw
                .println(&format!("Command '{name}' is unavailable"));
            return Ok(());
        }
        if !command.validate(args) {
            // Diagnostic already emitted by validate.
            return Ok(());
        }
        debug!("Executing command '{}'", name);
        command.execute(args).await
    }

    /// Batch dispatch: a total function over [`Output`]. Nothing that happens
    /// past resolution may escape as an error.
    pub async fn serializable_execute(&self, name: &str, args: &[String]) -> Output {
        let command = match self.registry.resolve(name) {
            Ok(command) => command,
            Err(e) => return Output::Failure(e.to_string()),
        };
        if !command.is_available() {
            return Output::Failure(format!("Command '{name}' is unavailable"));
        }
        if !command.validate(args) {
            return Output::Failure(format!("Invalid arguments to '{name}'"));
        }
        debug!("Executing command '{}' (serializable)", name);
        command.serializable_execute(args).await
    }
}

/// Splits one input line into a command name and its arguments. Tokenization
/// is plain whitespace splitting; a blank line yields `None`.
pub fn tokenize(line: &str) -> Option<(&str, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?;
    Some((name, tokens.map(str::to_string).collect()))
}
