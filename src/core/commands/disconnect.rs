// src/core/commands/disconnect.rs

use super::command_trait::Command;
use super::helpers::expect_no_args;
use crate::core::net::ConnectionBus;
use crate::core::{Output, TracelinkError};
use crate::tui::ClientWriter;
use async_trait::async_trait;
use std::sync::Arc;

/// Clears the active connection by publishing an explicit absence to every
/// listener. Tearing the underlying session down is the connection
/// collaborator's business; this command only drives the notification.
pub struct DisconnectCommand {
    cw: ClientWriter,
    bus: Arc<ConnectionBus>,
}

impl DisconnectCommand {
    pub const NAME: &'static str = "disconnect";

    pub fn new(cw: ClientWriter, bus: Arc<ConnectionBus>) -> Self {
        Self { cw, bus }
    }
}

#[async_trait]
impl Command for DisconnectCommand {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, args: &[String]) -> bool {
        expect_no_args(&self.cw, args)
    }

    async fn execute(&self, _args: &[String]) -> Result<(), TracelinkError> {
        self.bus.publish(None);
        self.cw.println("\tDisconnected");
        Ok(())
    }

    async fn serializable_execute(&self, _args: &[String]) -> Output {
        self.bus.publish(None);
        Output::Success
    }
}
