#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records dated, categorised expenses for a session and
//! summarises them by day, week, and month against a monthly budget.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Tracker tracing initialized.");
    });
}
