//! Configuration file → running gateway.

use ens_apt_domain::{CliOverrides, Config, SigningProtocol};
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::*;

#[test]
fn test_load_file_with_overrides() {
    let path = std::env::temp_dir().join(format!("ens-apt-gateway-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        gateway_toml("http://node.invalid/v1", "http://indexer.invalid/v1/graphql", "ens"),
    )
    .unwrap();

    let config = Config::load(
        path.to_str(),
        CliOverrides {
            port: Some(9000),
            bind_address: None,
            log_level: Some("debug".into()),
        },
    )
    .unwrap();
    std::fs::remove_file(&path).ok();

    assert!(config.validate().is_ok());
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.gateway.protocol, SigningProtocol::Ens);
    assert_eq!(config.chains.len(), 1);
    assert_eq!(config.chain_routes()[0].evm_resolver.as_ref(), RESOLVER);
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(Config::load(Some("/nonexistent/gateway.toml"), CliOverrides::default()).is_err());
}

#[tokio::test]
async fn test_gateway_from_config_serves_owned_names() {
    let chain = MockChain::start().await;
    chain.add_name("alice", "", ALICE_OWNER, ALICE_REGISTERED).await;
    chain.add_name("bob", "", "0xbbb", "0xbbb").await;

    let config =
        Config::from_toml(&gateway_toml(&chain.node_url(), &chain.indexer_url(), "tor")).unwrap();
    let gateway = TestGateway::start(config).await;

    let names: Value = reqwest::get(gateway.url("/m/owners/0xaaa/names"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(names.as_array().unwrap().len(), 1);
    assert_eq!(names[0]["name"], "alice.apt");

    let unknown = reqwest::get(gateway.url("/s/owners/0xaaa/names")).await.unwrap();
    assert_eq!(unknown.status(), 404);
}
