pub mod ccip;

pub use ccip::{CcipReadBody, CcipReadResponse};
