pub mod error;
pub mod item_repo;

pub use item_repo::{ItemStore, PgItemStore};
