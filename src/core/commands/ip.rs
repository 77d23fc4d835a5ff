// src/core/commands/ip.rs

use super::command_trait::Command;
use super::helpers::expect_no_args;
use crate::core::net::NetworkResolver;
use crate::core::{Output, TracelinkError};
use crate::tui::ClientWriter;
use async_trait::async_trait;
use std::sync::Arc;

/// Queries the resolver for the client's own address.
pub struct IpCommand {
    cw: ClientWriter,
    resolver: Arc<dyn NetworkResolver>,
}

impl IpCommand {
    pub const NAME: &'static str = "ip";

    pub fn new(cw: ClientWriter, resolver: Arc<dyn NetworkResolver>) -> Self {
        Self { cw, resolver }
    }

    fn resolve(&self) -> Result<String, TracelinkError> {
        self.resolver.host_address()
    }
}

#[async_trait]
impl Command for IpCommand {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self, args: &[String]) -> bool {
        expect_no_args(&self.cw, args)
    }

    async fn execute(&self, _args: &[String]) -> Result<(), TracelinkError> {
        let address = self.resolve()?;
        self.cw.println(&format!("\t{address}"));
        Ok(())
    }

    async fn serializable_execute(&self, _args: &[String]) -> Output {
        match self.resolve() {
            Ok(address) => Output::StringPayload(address),
            Err(e) => Output::exception(&e),
        }
    }
}
