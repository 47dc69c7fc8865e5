//! spendwise-domain
//!
//! Pure domain models (Budget, Expense, categories, periods, summaries).
//! No I/O, no CLI, no storage. Only data types, date helpers and core enums.

pub mod budget;
pub mod category;
pub mod common;
pub mod dates;
pub mod error;
pub mod expense;
pub mod period;
pub mod summary;

pub use budget::*;
pub use category::*;
pub use common::*;
pub use error::DomainError;
pub use expense::*;
pub use period::*;
pub use summary::*;
