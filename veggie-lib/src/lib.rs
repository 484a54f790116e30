//! Back-office library for the vegetable subscription dashboard.
//!
//! Holds the record types, an [`AdminStore`](store::AdminStore) to load them
//! from, the [`gridkit`] table definition of each list page and the state of
//! the edit forms.

pub mod error;
pub mod fixtures;
pub mod forms;
pub mod model;
pub mod store;
pub mod tables;

pub use error::{FieldValidationError, FormError, StoreError};
pub use store::{AdminStore, MemoryStore};
pub use tables::{PageKind, TablePage};
