#![doc(test(attr(deny(warnings))))]

//! Credito Core offers loan-book primitives: loan and payment records, the
//! bookkeeping operations over them, and wholesale JSON persistence backing a
//! small listing/detail CLI.

pub mod cli;
pub mod core;
pub mod credit;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Credito Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
