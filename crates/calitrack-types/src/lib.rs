pub mod catalog;
pub mod domain;
pub mod error;

pub use catalog::{CatalogEntry, exercises_for};
pub use domain::*;
pub use error::{Error, Result};
