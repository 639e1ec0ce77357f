#![doc(test(attr(deny(warnings))))]

//! Fintrack Core records income and expense transactions under user-defined
//! categories and derives the monthly summaries, category breakdowns, and
//! trend series that power finance dashboards.

pub mod analytics;
pub mod currency;
pub mod dates;
pub mod errors;
pub mod model;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}
