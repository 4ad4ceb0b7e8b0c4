//! Aptos fullnode REST adapter for the resolver module's view functions.

mod payload;
mod view_client;

pub use payload::{ViewArgument, ViewRequest};
pub use view_client::AptosViewClient;
