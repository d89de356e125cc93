#![doc(test(attr(deny(warnings))))]

//! Tontine Core provides the rotation-scheduling and savings-ledger
//! computations behind the CEPEA237 member portal: meeting dates, per-member
//! rotation slots with progressive pot accrual, balance and monthly series
//! aggregation, and the sanction/interest/secours formulas.
//!
//! Every function here is pure: callers pass in fully fetched snapshots and a
//! reference instant, and get freshly computed values back. Fetching rows from
//! the spreadsheet backend and reading the clock belong to the surrounding
//! application.

pub mod config;
pub mod errors;
pub mod finance;
pub mod ledger;
pub mod schedule;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Tontine Core tracing initialized.");
    });
}
