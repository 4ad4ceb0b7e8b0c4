//! Application layer: ports to the Aptos side and the resolution use cases.
pub mod ports;
pub mod use_cases;
