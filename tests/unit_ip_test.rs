mod common;

use common::*;
use std::sync::Arc;
use tracelink::core::Output;
use tracelink::core::commands::Command;
use tracelink::core::commands::ip::IpCommand;

fn command(resolver: MockResolver) -> (IpCommand, Arc<parking_lot::Mutex<Vec<u8>>>) {
    let (cw, buffer) = writer();
    (IpCommand::new(cw, Arc::new(resolver)), buffer)
}

#[tokio::test]
async fn test_ip_name() {
    let (command, _) = command(MockResolver::ok("192.168.2.1"));
    assert_eq!(command.name(), "ip");
}

#[tokio::test]
async fn test_ip_expects_no_args() {
    let (command, buffer) = command(MockResolver::ok("192.168.2.1"));
    assert!(command.validate(&[]));
    assert_eq!(written(&buffer), "");
}

#[tokio::test]
async fn test_ip_rejects_args() {
    let (command, buffer) = command(MockResolver::ok("192.168.2.1"));
    assert!(!command.validate(&args(&["one"])));
    assert_eq!(written(&buffer), "No arguments expected\n");
}

#[tokio::test]
async fn test_ip_is_available() {
    let (command, _) = command(MockResolver::ok("192.168.2.1"));
    assert!(command.is_available());
}

#[tokio::test]
async fn test_ip_prints_resolver_address() {
    let (command, buffer) = command(MockResolver::ok("192.168.2.1"));
    command.execute(&[]).await.unwrap();
    assert_eq!(written(&buffer), "\t192.168.2.1\n");
}

#[tokio::test]
async fn test_ip_returns_string_payload() {
    let (command, _) = command(MockResolver::ok("192.168.2.1"));
    assert_eq!(
        command.serializable_execute(&[]).await,
        Output::StringPayload("192.168.2.1".to_string())
    );
}

#[tokio::test]
async fn test_ip_execute_propagates_resolution_error() {
    let (command, buffer) = command(MockResolver::failing("no route"));
    let err = command.execute(&[]).await.unwrap_err();
    assert!(err.to_string().contains("no route"));
    assert_eq!(written(&buffer), "");
}

#[tokio::test]
async fn test_ip_converts_resolution_error_to_exception() {
    // An empty resolution message must be preserved verbatim in the payload.
    let (command, _) = command(MockResolver::failing(""));
    let output = command.serializable_execute(&[]).await;
    assert_eq!(output.kind(), "exception");
    assert_eq!(output.payload(), "HostResolutionError: ");
}
