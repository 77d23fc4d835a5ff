// src/core/commands/connected.rs

//! Shared state and helpers for commands that operate against the live
//! connection.

use crate::core::TracelinkError;
use crate::core::net::{Connection, RecordingDescriptor, RecordingStream};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// The most recently observed connection, as delivered by listener
/// notifications, plus deadline-bounded wrappers over the remote service.
///
/// The cached reference sits behind a lock because notification may arrive
/// from a different thread than dispatch; the lock gives the required
/// happens-before edge between a notification and any later availability
/// check or execution on the same command.
pub struct ConnectedCommandState {
    connection: RwLock<Option<Arc<Connection>>>,
    remote_timeout: Duration,
}

impl ConnectedCommandState {
    pub fn new(remote_timeout: Duration) -> Self {
        Self {
            connection: RwLock::new(None),
            remote_timeout,
        }
    }

    /// Listener entry point: overwrites the cached reference with the new
    /// value, authoritative whether it is a connection or an absence.
    pub fn connection_changed(&self, connection: Option<Arc<Connection>>) {
        *self.connection.write() = connection;
    }

    pub fn current(&self) -> Option<Arc<Connection>> {
        self.connection.read().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.connection.read().is_some()
    }

    pub fn require_connection(&self) -> Result<Arc<Connection>, TracelinkError> {
        self.current().ok_or(TracelinkError::NotConnected)
    }

    /// Lists remote recordings, bounded by the configured remote deadline.
    pub async fn list_recordings(
        &self,
        conn: &Connection,
    ) -> Result<Vec<RecordingDescriptor>, TracelinkError> {
        timeout(self.remote_timeout, conn.service().list_recordings())
            .await
            .map_err(|_| {
                TracelinkError::Timeout(format!("listing recordings on {}", conn.endpoint()))
            })?
    }

    /// Finds one remote recording by exact name, if present.
    pub async fn descriptor_by_name(
        &self,
        conn: &Connection,
        name: &str,
    ) -> Result<Option<RecordingDescriptor>, TracelinkError> {
        let descriptors = self.list_recordings(conn).await?;
        Ok(descriptors.into_iter().find(|d| d.name == name))
    }

    /// Opens a stream over one recording, bounded by the remote deadline.
    pub async fn open_stream(
        &self,
        conn: &Connection,
        descriptor: &RecordingDescriptor,
    ) -> Result<RecordingStream, TracelinkError> {
        timeout(self.remote_timeout, conn.service().open_stream(descriptor))
            .await
            .map_err(|_| {
                TracelinkError::Timeout(format!(
                    "opening stream for \"{}\" on {}",
                    descriptor.name,
                    conn.endpoint()
                ))
            })?
    }
}
