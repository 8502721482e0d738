//! Feature catalog: an in-memory store of product feature entries with
//! JSON import, search and type filtering.

pub mod config;
pub mod data;
pub mod download;
pub mod error;
pub mod file_ops;
pub mod form;
pub mod import;
pub mod matcher;
pub mod render;
pub mod store;

pub use data::{Envelope, Feature};
pub use error::{CatalogError, SchemaError};
pub use store::{Action, FeatureStore};
