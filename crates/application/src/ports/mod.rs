mod chain_clients;
mod ownership_index;
mod resolver_view;

pub use chain_clients::{ChainClients, ChainServices};
pub use ownership_index::OwnershipIndex;
pub use resolver_view::ResolverViewClient;
