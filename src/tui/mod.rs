// src/tui/mod.rs

//! The interactive and batch front-ends, plus the dispatch path they share.

pub mod batch;
pub mod dispatcher;
pub mod interactive;
pub mod reader;
pub mod writer;

pub use batch::BatchModeExecutor;
pub use dispatcher::Dispatcher;
pub use interactive::InteractiveShellExecutor;
pub use reader::{ClientReader, TtyClientReader};
pub use writer::ClientWriter;
