//! Integration tests for race-free, identity-stable logger creation.
//!
//! These tests verify that the registry publishes exactly one logger per
//! category no matter how many threads race on the first request.

use std::sync::{Arc, Barrier};
use std::thread;

use capture::{CaptureConfig, CaptureError, CaptureRegistry};

// ============================================================================
// Idempotent Creation
// ============================================================================

/// Verifies one hundred concurrent first-time requests for the same
/// category all observe the same instance, and the registry holds exactly
/// one logger afterwards.
#[test]
fn hundred_concurrent_requests_share_one_logger() {
    let registry = Arc::new(CaptureRegistry::new(CaptureConfig::default()));
    let barrier = Arc::new(Barrier::new(100));

    let handles: Vec<_> = (0..100)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.logger("X").unwrap()
            })
        })
        .collect();

    let loggers: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let first = &loggers[0];
    for logger in &loggers {
        assert!(Arc::ptr_eq(first, logger));
    }
    assert_eq!(registry.logger_count(), 1);
}

/// Verifies distinct categories produce distinct loggers that still share
/// one sink.
#[test]
fn distinct_categories_share_the_sink() {
    let registry = CaptureRegistry::new(CaptureConfig::default());
    let alpha = registry.logger("Alpha").unwrap();
    let beta = registry.logger("Beta").unwrap();

    assert!(!Arc::ptr_eq(&alpha, &beta));
    alpha.info("a");
    beta.info("b");
    assert_eq!(registry.sink().len(), 2);
    assert_eq!(registry.logger_count(), 2);
}

/// Verifies a logger obtained before a burst of concurrent lookups is the
/// same instance every later lookup returns.
#[test]
fn early_instance_stays_canonical() {
    let registry = Arc::new(CaptureRegistry::new(CaptureConfig::default()));
    let original = registry.logger("Stable").unwrap();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.logger("Stable").unwrap())
        })
        .collect();

    for handle in handles {
        assert!(Arc::ptr_eq(&original, &handle.join().unwrap()));
    }
}

// ============================================================================
// Invalid Arguments
// ============================================================================

/// Verifies an empty category is rejected without creating any state.
#[test]
fn empty_category_is_an_invalid_argument() {
    let registry = CaptureRegistry::new(CaptureConfig::default());
    assert!(matches!(
        registry.logger(""),
        Err(CaptureError::EmptyCategory)
    ));
    assert_eq!(registry.logger_count(), 0);
}
