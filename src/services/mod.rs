//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and staged edits.

pub mod edit;
pub mod expense;

pub use edit::ExpenseEdit;
pub use expense::{ExpenseFilter, ExpenseService};
