// src/tui/reader.rs

//! Asynchronous line input for the interactive shell.

use crate::core::TracelinkError;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// An asynchronous source of input lines. `Ok(None)` is end-of-input, a
/// clean termination and not an error state.
#[async_trait]
pub trait ClientReader: Send {
    async fn read_line(&mut self) -> Result<Option<String>, TracelinkError>;
}

/// Reads lines from the process's stdin.
pub struct TtyClientReader {
    lines: Lines<BufReader<Stdin>>,
}

impl TtyClientReader {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for TtyClientReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientReader for TtyClientReader {
    async fn read_line(&mut self) -> Result<Option<String>, TracelinkError> {
        Ok(self.lines.next_line().await?)
    }
}
