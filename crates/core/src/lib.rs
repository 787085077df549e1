//! Budgetfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the core budgeting logic for Budgetfolio.
//! It is storage-agnostic: the repository traits defined here are
//! implemented by the embedding application (an in-memory
//! implementation ships with the crate).

pub mod budgets;
pub mod errors;

// Re-export common types from the budgets module
pub use budgets::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
