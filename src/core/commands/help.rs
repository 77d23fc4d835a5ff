// src/core/commands/help.rs

use super::command_trait::Command;
use super::helpers::expect_no_args;
use crate::core::{Output, TracelinkError};
use crate::tui::ClientWriter;
use async_trait::async_trait;

/// Prints the sorted registry listing. The listing is fixed at wiring time,
/// which is also when the registry becomes read-only.
pub struct HelpCommand {
    cw: ClientWriter,
    names: Vec<String>,
}

impl HelpCommand {
    pub const NAME: &'static str = "help";

    pub fn new(cw: ClientWriter, names: Vec<String>) -> Self {
        Self { cw, names }
    }

    fn listing(&self) -> String {
        self.names.join("\n")
    }
}

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, args: &[String]) -> bool {
        expect_no_args(&self.cw, args)
    }

    async fn execute(&self, _args: &[String]) -> Result<(), TracelinkError> {
        self.cw.println("Available commands:");
        for name in &self.names {
            self.cw.println(&format!("\t{name}"));
        }
        Ok(())
    }

    async fn serializable_execute(&self, _args: &[String]) -> Output {
        Output::StringPayload(self.listing())
    }
}
