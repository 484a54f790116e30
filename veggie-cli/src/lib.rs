//! Command-line front end for the vegetable subscription back office.
//!
//! Lists any admin page through its `gridkit` table, drives the order,
//! delivery and complaint forms, and keeps user preferences in a small
//! settings database.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod paths;
pub mod settings;

pub use error::CliError;
