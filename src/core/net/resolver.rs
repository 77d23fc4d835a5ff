// src/core/net/resolver.rs

//! Host-address resolution for the local end of the management channel.

use crate::core::TracelinkError;
use std::net::UdpSocket;

/// Resolves the address the client is reachable at.
pub trait NetworkResolver: Send + Sync {
    fn host_address(&self) -> Result<String, TracelinkError>;
}

/// Default resolver: determines the local routable address by opening an
/// unbound UDP socket towards a public address. No datagram is ever sent;
/// the connect call only selects the outbound interface.
pub struct LocalNetworkResolver;

impl NetworkResolver for LocalNetworkResolver {
    fn host_address(&self) -> Result<String, TracelinkError> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket
            .connect("8.8.8.8:80")
            .map_err(|e| TracelinkError::HostResolution(e.to_string()))?;
        let addr = socket
            .local_addr()
            .map_err(|e| TracelinkError::HostResolution(e.to_string()))?;
        Ok(addr.ip().to_string())
    }
}
