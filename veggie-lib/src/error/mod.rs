//! Error types

mod form;
mod store;
mod validation;

pub use form::*;
pub use store::*;
pub use validation::*;
