// src/core/mod.rs

//! The central module containing the core logic and data structures of Tracelink.

pub mod commands;
pub mod errors;
pub mod fs;
pub mod net;
pub mod protocol;

pub use errors::TracelinkError;
pub use protocol::Output;
