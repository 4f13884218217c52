#![doc(test(attr(deny(warnings))))]

//! Trip Core computes per-diem travel allowances for employee business
//! trips and derives the downstream financial documents (expense claims,
//! purchase invoice drafts) once a trip is submitted.

pub mod config;
pub mod documents;
pub mod errors;
pub mod host;
pub mod services;
pub mod trip;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Trip Core tracing initialized.");
    });
}
