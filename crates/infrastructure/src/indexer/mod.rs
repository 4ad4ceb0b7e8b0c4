//! Aptos names indexer (Hasura GraphQL) adapter.

mod graphql;
mod queries;

pub use graphql::GraphqlOwnershipIndex;
