// src/core/net/listener.rs

//! The observer registry that fans connection lifecycle changes out to every
//! interested component.

use super::Connection;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Implemented by anything that needs to track the active connection.
///
/// The callback is authoritative: implementors must overwrite any previously
/// cached connection reference with the new value, and must not panic.
pub trait ConnectionListener: Send + Sync {
    fn connection_changed(&self, connection: Option<Arc<Connection>>);
}

/// Process-wide registry of connection observers.
///
/// Listeners are subscribed once during startup wiring and notified
/// synchronously, in subscription order, every time the active connection is
/// established, replaced, or cleared. Notification may originate from a
/// different thread than command dispatch, so the listener list sits behind a
/// lock and listeners are expected to cache state behind one too.
#[derive(Default)]
pub struct ConnectionBus {
    listeners: RwLock<Vec<Arc<dyn ConnectionListener>>>,
}

impl ConnectionBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener. Subscription order is delivery order.
    pub fn subscribe(&self, listener: Arc<dyn ConnectionListener>) {
        self.listeners.write().push(listener);
    }

    /// Delivers the new connection value (or `None` for "disconnected") to
    /// every subscribed listener.
    pub fn publish(&self, connection: Option<Arc<Connection>>) {
        match &connection {
            Some(conn) => debug!("Connection changed: {}", conn.endpoint()),
            None => debug!("Connection cleared"),
        }
        for listener in self.listeners.read().iter() {
            listener.connection_changed(connection.clone());
        }
    }

    /// The number of subscribed listeners.
    pub fn len(&self) -> usize {
        self.listeners.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }
}
