//! spendwise-core
//!
//! Business logic for the SpendWise dashboard.
//! Depends on spendwise-domain. No CLI, no terminal I/O, no direct storage interactions.
//!
//! The compute stage ([`ActivityService`], [`PeriodService`], [`SummaryService`],
//! [`SpendingService`]) is made of pure functions over snapshots. Only
//! [`DashboardService`] is async: it fetches snapshots through the
//! [`BudgetSource`] and [`ExpenseSource`] seams and hands them to the compute stage.

pub mod activity_service;
pub mod dashboard_service;
pub mod error;
pub mod period_service;
pub mod seed;
pub mod source;
pub mod spending_service;
pub mod summary_service;
pub mod time;

pub use activity_service::*;
pub use dashboard_service::*;
pub use error::CoreError;
pub use period_service::*;
pub use seed::SeedData;
pub use source::*;
pub use spending_service::*;
pub use summary_service::*;
pub use time::{Clock, FixedClock, SystemClock};
