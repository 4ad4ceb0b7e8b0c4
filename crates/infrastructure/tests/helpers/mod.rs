pub mod mock_aptos;
pub mod mock_indexer;

#[allow(unused_imports)]
pub use mock_aptos::MockAptosNode;
#[allow(unused_imports)]
pub use mock_indexer::MockIndexer;
