// src/core/protocol/mod.rs

//! The structured result protocol used when command output has to cross a
//! non-interactive boundary.

pub mod output;

pub use output::Output;
