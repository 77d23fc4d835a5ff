// src/tui/interactive.rs

//! The interactive shell: prompt, read, tokenize, dispatch, repeat.

use super::dispatcher::{Dispatcher, tokenize};
use super::reader::ClientReader;
use super::writer::ClientWriter;
use crate::core::TracelinkError;
use crate::core::commands::exit::ExitCommand;
use crate::core::net::{Connection, ConnectionListener};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Owns the interactive read loop. Also a connection listener so the prompt
/// can show the live endpoint.
pub struct InteractiveShellExecutor {
    cw: ClientWriter,
    dispatcher: Dispatcher,
    connection: RwLock<Option<Arc<Connection>>>,
}

impl InteractiveShellExecutor {
    pub fn new(cw: ClientWriter, dispatcher: Dispatcher) -> Self {
        Self {
            cw,
            dispatcher,
            connection: RwLock::new(None),
        }
    }

    fn prompt(&self) -> String {
        match self.connection.read().as_ref() {
            Some(conn) => format!("{}> ", conn.endpoint()),
            None => "> ".to_string(),
        }
    }

    /// Runs until the exit command or end-of-input. A command error is
    /// printed and the loop continues; only a failing reader ends the loop
    /// with an error.
    pub async fn run(&self, reader: &mut dyn ClientReader) -> Result<(), TracelinkError> {
        loop {
            self.cw.print(&self.prompt());
            let Some(line) = reader.read_line().await? else {
                debug!("End of input, leaving interactive shell");
                break;
            };
            let Some((name, args)) = tokenize(&line) else {
                continue;
            };
            if let Err(e) = self.dispatcher.execute(name, &args).await {
                self.cw.println(&e.to_string());
            }
            if name == ExitCommand::NAME && args.is_empty() {
                break;
            }
        }
        Ok(())
    }
}

impl ConnectionListener for InteractiveShellExecutor {
    fn connection_changed(&self, connection: Option<Arc<Connection>>) {
        *self.connection.write() = connection;
    }
}
