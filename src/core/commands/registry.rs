// src/core/commands/registry.rs

//! Maps command names to command instances.

use super::command_trait::Command;
use crate::core::TracelinkError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// The command registry. Built once during startup wiring and read-only
/// during dispatch; every registered name maps to exactly one command.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command, rejecting duplicate names at wiring time.
    pub fn register(&mut self, command: Arc<dyn Command>) -> Result<(), TracelinkError> {
        let name = command.name();
        if self.commands.contains_key(name) {
            return Err(TracelinkError::DuplicateCommand(name.to_string()));
        }
        self.commands.insert(name.to_string(), command);
        Ok(())
    }

    /// Resolves a requested name to a command. Exact, case-sensitive match.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Command>, TracelinkError> {
        self.commands
            .get(name)
            .cloned()
            .ok_or_else(|| TracelinkError::UnknownCommand(name.to_string()))
    }

    /// All registered names, sorted, for help and validation displays.
    pub fn names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
