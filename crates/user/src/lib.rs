pub mod follow;

pub(crate) mod repository;
mod root;

pub use repository::User;
pub use root::*;
