// src/core/commands/save_recording.rs

use super::command_trait::Command;
use super::connected::ConnectedCommandState;
use super::helpers::is_valid_recording_name;
use crate::core::fs::FileSystem;
use crate::core::net::{Connection, ConnectionListener};
use crate::core::{Output, TracelinkError};
use crate::tui::ClientWriter;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// The file extension given to saved recordings.
const RECORDING_EXTENSION: &str = "jfr";

/// What one save attempt amounted to, before error surfacing is chosen.
enum SaveOutcome {
    Saved,
    /// Carries the not-found message; a benign terminal message in the
    /// interactive path, a `Failure` in the serializable path.
    NotFound(String),
}

/// Copies one remote recording into the local recordings directory,
/// overwriting any existing file of the same name.
pub struct SaveRecordingCommand {
    cw: ClientWriter,
    fs: Arc<dyn FileSystem>,
    recordings_path: PathBuf,
    state: ConnectedCommandState,
}

impl SaveRecordingCommand {
    pub const NAME: &'static str = "save";

    pub fn new(
        cw: ClientWriter,
        fs: Arc<dyn FileSystem>,
        recordings_path: PathBuf,
        remote_timeout: Duration,
    ) -> Self {
        Self {
            cw,
            fs,
            recordings_path,
            state: ConnectedCommandState::new(remote_timeout),
        }
    }

    /// The single execution path both trait methods translate from.
    async fn save(&self, name: &str) -> Result<SaveOutcome, TracelinkError> {
        let conn = self.state.require_connection()?;
        let Some(descriptor) = self.state.descriptor_by_name(&conn, name).await? else {
            return Ok(SaveOutcome::NotFound(format!(
                "Recording with name \"{name}\" not found"
            )));
        };
        let stream = self.state.open_stream(&conn, &descriptor).await?;
        let destination = self
            .recordings_path
            .join(format!("{}.{RECORDING_EXTENSION}", descriptor.name));
        self.fs.copy(stream, &destination, true).await?;
        info!(
            "Saved recording \"{}\" to {}",
            descriptor.name,
            destination.display()
        );
        Ok(SaveOutcome::Saved)
    }
}

impl ConnectionListener for SaveRecordingCommand {
    fn connection_changed(&self, connection: Option<Arc<Connection>>) {
        self.state.connection_changed(connection);
    }
}

#[async_trait]
impl Command for SaveRecordingCommand {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_available(&self) -> bool {
        self.state.is_connected() && self.fs.is_directory(&self.recordings_path)
    }

    fn validate(&self, args: &[String]) -> bool {
        if args.len() != 1 {
            self.cw.println("Expected one argument: recording name");
            return false;
        }
        let name = &args[0];
        if !is_valid_recording_name(name) {
            self.cw
                .println(&format!("{name} is an invalid recording name"));
            return false;
        }
        true
    }

    async fn execute(&self, args: &[String]) -> Result<(), TracelinkError> {
        match self.save(&args[0]).await? {
            SaveOutcome::Saved => Ok(()),
            SaveOutcome::NotFound(msg) => {
                self.cw.println(&msg);
                Ok(())
            }
        }
    }

    async fn serializable_execute(&self, args: &[String]) -> Output {
        match self.save(&args[0]).await {
            Ok(SaveOutcome::Saved) => Output::Success,
            Ok(SaveOutcome::NotFound(msg)) => Output::Failure(msg),
            Err(e) => Output::exception(&e),
        }
    }
}
