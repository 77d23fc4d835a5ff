// src/core/net/mod.rs

//! The connection model: the opaque handle to a live remote session and the
//! collaborator traits it exposes. The protocol client that establishes
//! sessions lives outside this crate; the core only reacts to the handles it
//! is handed through listener notifications.

pub mod listener;
pub mod resolver;

use crate::core::TracelinkError;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio::io::AsyncRead;

pub use listener::{ConnectionBus, ConnectionListener};
pub use resolver::{LocalNetworkResolver, NetworkResolver};

/// A byte stream opened from a remote recording.
pub type RecordingStream = Box<dyn AsyncRead + Send + Unpin>;

/// Identifies one recording on the remote target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingDescriptor {
    pub id: u64,
    pub name: String,
}

/// The service handle exposed by a live connection. Implementations wrap the
/// actual management-protocol client.
#[async_trait]
pub trait RecordingService: Send + Sync {
    /// Lists the recordings currently present on the remote target.
    async fn list_recordings(&self) -> Result<Vec<RecordingDescriptor>, TracelinkError>;

    /// Opens a byte stream over the contents of one recording.
    async fn open_stream(
        &self,
        descriptor: &RecordingDescriptor,
    ) -> Result<RecordingStream, TracelinkError>;
}

/// A live session to a remote managed process. Zero or one is active at any
/// time; commands never own it, they hold the reference delivered by the
/// latest listener notification.
#[derive(Clone)]
pub struct Connection {
    host: String,
    port: u16,
    service: Arc<dyn RecordingService>,
}

impl Connection {
    pub fn new(host: impl Into<String>, port: u16, service: Arc<dyn RecordingService>) -> Self {
        Self {
            host: host.into(),
            port,
            service,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The `"<host>:<port>"` rendering used in prompts and status output.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn service(&self) -> &Arc<dyn RecordingService> {
        &self.service
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}
