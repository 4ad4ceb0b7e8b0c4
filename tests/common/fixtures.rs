pub const SIGNING_KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
pub const RESOLVER: &str = "0x828ec5bDe537B8673AF98D77bCB275ae1CA26D1f";
pub const MODULE: &str = "0x4aac1f0a41d1251b67e7623b3bdf3034cbd4bb05938a1129ddd9dec3ba8ed200::resolver";

pub const ALICE_OWNER: &str = "0xaaa";
pub const ALICE_REGISTERED: &str = "0xbbb";
/// `alice.apt` in DNS wire format
pub const ALICE_NODE: &str = "0x05616c6963650361707400";
/// A 32-byte Sui address stored under coin type 784
pub const SUI_ADDR: &str = "0x7b5b9dd8f4b2e9a1c3d5e7f90123456789abcdef0123456789abcdef01234567";

/// Config for one chain `m` whose endpoints point at a mock.
pub fn gateway_toml(node_url: &str, indexer_url: &str, protocol: &str) -> String {
    format!(
        r#"
[server]
port = 0
bind_address = "127.0.0.1"

[gateway]
protocol = "{protocol}"
signature_ttl = 60

[aptos]
resolver_module = "{MODULE}"
view_timeout = 2000
indexer_timeout = 2000

[[chains]]
key = "m"
node_url = "{node_url}"
indexer_url = "{indexer_url}"
evm_resolver = "{RESOLVER}"

[signing]
private_key = "{SIGNING_KEY}"
"#
    )
}
