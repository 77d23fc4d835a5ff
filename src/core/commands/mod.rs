// src/core/commands/mod.rs

//! This module defines all supported commands and the startup wiring that
//! assembles them into a registry. Commands that track the active connection
//! are subscribed on the connection bus as part of the same wiring pass.

use crate::core::TracelinkError;
use crate::core::fs::FileSystem;
use crate::core::net::{ConnectionBus, NetworkResolver};
use crate::tui::ClientWriter;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub mod command_trait;
pub mod connected;
pub mod disconnect;
pub mod exit;
pub mod help;
pub mod helpers;
pub mod ip;
pub mod is_connected;
pub mod list_recordings;
pub mod registry;
pub mod save_recording;

pub use command_trait::Command;
pub use registry::CommandRegistry;

/// The collaborators injected into command construction. Built once at
/// startup from the resolved configuration; no ambient global state.
pub struct CommandContext {
    pub cw: ClientWriter,
    pub fs: Arc<dyn FileSystem>,
    pub resolver: Arc<dyn NetworkResolver>,
    pub recordings_path: PathBuf,
    pub remote_timeout: Duration,
}

/// Constructs every command, registers it, and subscribes the
/// connection-tracking ones on the bus. The returned registry is complete and
/// read-only from here on.
pub fn build_registry(
    ctx: &CommandContext,
    bus: &Arc<ConnectionBus>,
) -> Result<Arc<CommandRegistry>, TracelinkError> {
    let mut registry = CommandRegistry::new();

    let is_connected = Arc::new(is_connected::IsConnectedCommand::new(ctx.cw.clone()));
    bus.subscribe(is_connected.clone());
    registry.register(is_connected)?;

    registry.register(Arc::new(ip::IpCommand::new(
        ctx.cw.clone(),
        ctx.resolver.clone(),
    )))?;

    let save = Arc::new(save_recording::SaveRecordingCommand::new(
        ctx.cw.clone(),
        ctx.fs.clone(),
        ctx.recordings_path.clone(),
        ctx.remote_timeout,
    ));
    bus.subscribe(save.clone());
    registry.register(save)?;

    let list = Arc::new(list_recordings::ListRecordingsCommand::new(
        ctx.cw.clone(),
        ctx.remote_timeout,
    ));
    bus.subscribe(list.clone());
    registry.register(list)?;

    registry.register(Arc::new(disconnect::DisconnectCommand::new(
        ctx.cw.clone(),
        bus.clone(),
    )))?;

    registry.register(Arc::new(exit::ExitCommand::new(ctx.cw.clone())))?;

    // The help listing includes help itself, so collect names before the
    // final registration.
    let mut names = registry.names();
    names.push(help::HelpCommand::NAME.to_string());
    names.sort();
    registry.register(Arc::new(help::HelpCommand::new(ctx.cw.clone(), names)))?;

    Ok(Arc::new(registry))
}
