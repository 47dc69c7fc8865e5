#![doc(test(attr(deny(warnings))))]

//! SpendWise computes which budgets are active on a given day, which expenses
//! fall into their current periods, and the per-category totals shown on the
//! dashboard.

pub mod cli;
pub mod errors;
pub mod report;
pub mod utils;

pub use spendwise_config as config;
pub use spendwise_core as engine;
pub use spendwise_domain as domain;
pub use spendwise_storage_json as storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("SpendWise tracing initialized.");
    });
}
