// src/core/commands/exit.rs

use super::command_trait::Command;
use super::helpers::expect_no_args;
use crate::core::{Output, TracelinkError};
use crate::tui::ClientWriter;
use async_trait::async_trait;

/// The explicit exit sentinel. Executing it is a no-op; the interactive
/// shell recognizes the name and terminates its read loop.
pub struct ExitCommand {
    cw: ClientWriter,
}

impl ExitCommand {
    pub const NAME: &'static str = "exit";

    pub fn new(cw: ClientWriter) -> Self {
        Self { cw }
    }
}

#[async_trait]
impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, args: &[String]) -> bool {
        expect_no_args(&self.cw, args)
    }

    async fn execute(&self, _args: &[String]) -> Result<(), TracelinkError> {
        Ok(())
    }

    async fn serializable_execute(&self, _args: &[String]) -> Output {
        Output::Success
    }
}
