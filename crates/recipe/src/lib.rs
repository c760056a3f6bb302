pub mod favorite;
pub mod ingredient;

pub(crate) mod repository;
mod root;

pub use root::*;
