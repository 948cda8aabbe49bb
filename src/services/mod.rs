// Service exports
pub mod catalog;
pub mod store;

pub use catalog::{Catalog, CatalogError};
pub use store::{Cart, Favorites};
