//! Domain layer of the OPR (One Page Report) builder.
//!
//! Holds the report model and its pure transitions, the AI assist types and
//! the traits implemented by the outer crates.

pub mod config;
pub mod error;
pub mod generation;
pub mod print;
pub mod report;

pub use error::{OprError, Result};
