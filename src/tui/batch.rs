// src/tui/batch.rs

//! The batch front-end: one dispatch per invocation, structured result out.

use super::dispatcher::{Dispatcher, tokenize};
use super::writer::ClientWriter;
use crate::core::{Output, TracelinkError};

/// Executes a single command line and reports the serialized [`Output`].
pub struct BatchModeExecutor {
    cw: ClientWriter,
    dispatcher: Dispatcher,
}

impl BatchModeExecutor {
    pub fn new(cw: ClientWriter, dispatcher: Dispatcher) -> Self {
        Self { cw, dispatcher }
    }

    /// Dispatches one line. Total over [`Output`]: an empty line is a
    /// `Failure`, everything else follows the shared dispatch path.
    pub async fn execute(&self, line: &str) -> Output {
        let Some((name, args)) = tokenize(line) else {
            return Output::Failure("No command given".to_string());
        };
        self.dispatcher.serializable_execute(name, &args).await
    }

    /// Dispatches one line and writes the result as JSON.
    pub async fn run(&self, line: &str) -> Result<(), TracelinkError> {
        let output = self.execute(line).await;
        self.cw.println(&serde_json::to_string(&output)?);
        Ok(())
    }
}
