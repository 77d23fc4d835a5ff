// src/core/commands/list_recordings.rs

use super::command_trait::Command;
use super::connected::ConnectedCommandState;
use super::helpers::expect_no_args;
use crate::core::net::{Connection, ConnectionListener, RecordingDescriptor};
use crate::core::{Output, TracelinkError};
use crate::tui::ClientWriter;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Lists the recordings present on the remote target.
pub struct ListRecordingsCommand {
    cw: ClientWriter,
    state: ConnectedCommandState,
}

impl ListRecordingsCommand {
    pub const NAME: &'static str = "list";

    pub fn new(cw: ClientWriter, remote_timeout: Duration) -> Self {
        Self {
            cw,
            state: ConnectedCommandState::new(remote_timeout),
        }
    }

    async fn fetch(&self) -> Result<Vec<RecordingDescriptor>, TracelinkError> {
        let conn = self.state.require_connection()?;
        self.state.list_recordings(&conn).await
    }
}

impl ConnectionListener for ListRecordingsCommand {
    fn connection_changed(&self, connection: Option<Arc<Connection>>) {
        self.state.connection_changed(connection);
    }
}

#[async_trait]
impl Command for ListRecordingsCommand {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_available(&self) -> bool {
        self.state.is_connected()
    }

    fn validate(&self, args: &[String]) -> bool {
        expect_no_args(&self.cw, args)
    }

    async fn execute(&self, _args: &[String]) -> Result<(), TracelinkError> {
        let descriptors = self.fetch().await?;
        self.cw.println("Available recordings:");
        if descriptors.is_empty() {
            self.cw.println("\tNone");
        }
        for descriptor in &descriptors {
            self.cw.println(&format!("\t{}", descriptor.name));
        }
        Ok(())
    }

    async fn serializable_execute(&self, _args: &[String]) -> Output {
        match self.fetch().await {
            Ok(descriptors) => Output::StringPayload(
                descriptors
                    .iter()
                    .map(|d| d.name.as_str())
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Err(e) => Output::exception(&e),
        }
    }
}
