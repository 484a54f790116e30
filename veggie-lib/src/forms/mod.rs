//! Form state for the dashboard's edit screens.
//!
//! Forms are plain state machines: setters validate their input and leave
//! the form untouched on error, and `submit`/`validate` runs the field rules
//! and yields the record to hand to the store.

pub mod complaint;
pub mod delivery;
pub mod employee;
pub mod order;
mod validate;

pub use complaint::ComplaintForm;
pub use delivery::{DeliveryChange, DeliveryForm};
pub use employee::EmployeeDraft;
pub use order::{DeliveryEdit, DeliveryUpdate, OrderView};
pub use validate::{FieldCheck, Validator};
