// src/lib.rs

pub mod config;
pub mod core;
pub mod tui;

// Re-export
pub use crate::core::TracelinkError;
