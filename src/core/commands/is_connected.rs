// src/core/commands/is_connected.rs

use super::command_trait::Command;
use super::helpers::expect_no_args;
use crate::core::net::{Connection, ConnectionListener};
use crate::core::{Output, TracelinkError};
use crate::tui::ClientWriter;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

/// Reports the endpoint of the active connection.
///
/// Disconnection is deliberately not an error here: the serializable path
/// answers with the string payload `"false"` rather than a `Failure`.
pub struct IsConnectedCommand {
    cw: ClientWriter,
    connection: RwLock<Option<Arc<Connection>>>,
}

impl IsConnectedCommand {
    pub const NAME: &'static str = "is-connected";

    pub fn new(cw: ClientWriter) -> Self {
        Self {
            cw,
            connection: RwLock::new(None),
        }
    }

    fn endpoint(&self) -> Option<String> {
        self.connection.read().as_ref().map(|c| c.endpoint())
    }
}

impl ConnectionListener for IsConnectedCommand {
    fn connection_changed(&self, connection: Option<Arc<Connection>>) {
        *self.connection.write() = connection;
    }
}

#[async_trait]
impl Command for IsConnectedCommand {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, args: &[String]) -> bool {
        expect_no_args(&self.cw, args)
    }

    async fn execute(&self, _args: &[String]) -> Result<(), TracelinkError> {
        match self.endpoint() {
            Some(endpoint) => self.cw.println(&format!("\t{endpoint}")),
            None => self.cw.println("\tDisconnected"),
        }
        Ok(())
    }

    async fn serializable_execute(&self, _args: &[String]) -> Output {
        match self.endpoint() {
            Some(endpoint) => Output::StringPayload(endpoint),
            None => Output::StringPayload("false".to_string()),
        }
    }
}
