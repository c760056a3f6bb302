mod aggregator;
pub mod cart;
mod root;
pub mod storage;

pub use aggregator::*;
pub use root::*;
