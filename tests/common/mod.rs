#![allow(dead_code)]

//! Mock collaborators shared by the unit test binaries.

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tracelink::core::fs::FileSystem;
use tracelink::core::net::{
    Connection, NetworkResolver, RecordingDescriptor, RecordingService, RecordingStream,
};
use tracelink::core::{Output, TracelinkError};
use tracelink::tui::{ClientReader, ClientWriter};
use tracelink::core::commands::Command;

/// A remote service backed by a fixed descriptor list and payload.
pub struct MockRecordingService {
    descriptors: Vec<RecordingDescriptor>,
    payload: Bytes,
    delay: Option<Duration>,
    fail_open: bool,
    pub list_calls: AtomicUsize,
    pub stream_calls: AtomicUsize,
}

impl MockRecordingService {
    pub fn new(descriptors: Vec<RecordingDescriptor>) -> Self {
        Self {
            descriptors,
            payload: Bytes::from_static(b"recording bytes"),
            delay: None,
            fail_open: false,
            list_calls: AtomicUsize::new(0),
            stream_calls: AtomicUsize::new(0),
        }
    }

    /// Every remote call stalls for `delay` before answering.
    pub fn hanging(descriptors: Vec<RecordingDescriptor>, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(descriptors)
        }
    }

    /// `open_stream` fails with a connection error.
    pub fn failing_open(descriptors: Vec<RecordingDescriptor>) -> Self {
        Self {
            fail_open: true,
            ..Self::new(descriptors)
        }
    }
}

#[async_trait]
impl RecordingService for MockRecordingService {
    async fn list_recordings(&self) -> Result<Vec<RecordingDescriptor>, TracelinkError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.descriptors.clone())
    }

    async fn open_stream(
        &self,
        _descriptor: &RecordingDescriptor,
    ) -> Result<RecordingStream, TracelinkError> {
        self.stream_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_open {
            return Err(TracelinkError::Connection(
                "stream reset by peer".to_string(),
            ));
        }
        Ok(Box::new(Cursor::new(self.payload.clone())))
    }
}

pub fn descriptor(id: u64, name: &str) -> RecordingDescriptor {
    RecordingDescriptor {
        id,
        name: name.to_string(),
    }
}

pub fn connection(host: &str, port: u16, service: Arc<MockRecordingService>) -> Arc<Connection> {
    Arc::new(Connection::new(host, port, service))
}

/// A resolver answering with a fixed address or a fixed resolution error.
pub struct MockResolver {
    address: Option<String>,
    error_message: String,
}

impl MockResolver {
    pub fn ok(address: &str) -> Self {
        Self {
            address: Some(address.to_string()),
            error_message: String::new(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            address: None,
            error_message: message.to_string(),
        }
    }
}

impl NetworkResolver for MockResolver {
    fn host_address(&self) -> Result<String, TracelinkError> {
        match &self.address {
            Some(address) => Ok(address.clone()),
            None => Err(TracelinkError::HostResolution(self.error_message.clone())),
        }
    }
}

/// Records copy requests instead of touching the disk.
pub struct MockFileSystem {
    directory_exists: bool,
    pub copies: Mutex<Vec<(PathBuf, bool, Vec<u8>)>>,
}

impl MockFileSystem {
    pub fn new(directory_exists: bool) -> Self {
        Self {
            directory_exists,
            copies: Mutex::new(Vec::new()),
        }
    }

    pub fn copy_count(&self) -> usize {
        self.copies.lock().len()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    fn is_directory(&self, _path: &Path) -> bool {
        self.directory_exists
    }

    async fn copy(
        &self,
        mut source: RecordingStream,
        destination: &Path,
        overwrite: bool,
    ) -> Result<u64, TracelinkError> {
        let mut contents = Vec::new();
        source.read_to_end(&mut contents).await?;
        let written = contents.len() as u64;
        self.copies
            .lock()
            .push((destination.to_path_buf(), overwrite, contents));
        Ok(written)
    }
}

/// Feeds a fixed sequence of input lines, then end-of-input.
pub struct ScriptedReader {
    lines: VecDeque<String>,
}

impl ScriptedReader {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }
}

#[async_trait]
impl ClientReader for ScriptedReader {
    async fn read_line(&mut self) -> Result<Option<String>, TracelinkError> {
        Ok(self.lines.pop_front())
    }
}

/// A command with scripted availability/validity that counts every call, for
/// asserting what the dispatch path did and did not invoke.
pub struct CountingCommand {
    name: &'static str,
    available: bool,
    valid: bool,
    fail_execution: bool,
    pub validate_calls: AtomicUsize,
    pub execute_calls: AtomicUsize,
    pub serializable_calls: AtomicUsize,
}

impl CountingCommand {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            available: true,
            valid: true,
            fail_execution: false,
            validate_calls: AtomicUsize::new(0),
            execute_calls: AtomicUsize::new(0),
            serializable_calls: AtomicUsize::new(0),
        }
    }

    pub fn unavailable(name: &'static str) -> Self {
        Self {
            available: false,
            ..Self::new(name)
        }
    }

    pub fn invalid(name: &'static str) -> Self {
        Self {
            valid: false,
            ..Self::new(name)
        }
    }

    pub fn failing(name: &'static str) -> Self {
        Self {
            fail_execution: true,
            ..Self::new(name)
        }
    }

    pub fn executions(&self) -> usize {
        self.execute_calls.load(Ordering::SeqCst) + self.serializable_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Command for CountingCommand {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn validate(&self, _args: &[String]) -> bool {
        self.validate_calls.fetch_add(1, Ordering::SeqCst);
        self.valid
    }

    async fn execute(&self, _args: &[String]) -> Result<(), TracelinkError> {
        self.execute_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_execution {
            return Err(TracelinkError::Connection("remote hung up".to_string()));
        }
        Ok(())
    }

    async fn serializable_execute(&self, _args: &[String]) -> Output {
        self.serializable_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_execution {
            return Output::exception(&TracelinkError::Connection("remote hung up".to_string()));
        }
        Output::Success
    }
}

pub fn writer() -> (ClientWriter, Arc<Mutex<Vec<u8>>>) {
    ClientWriter::in_memory()
}

pub fn written(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8(buffer.lock().clone()).expect("writer output is UTF-8")
}

pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
