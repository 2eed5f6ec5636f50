#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! Scenario and fixture utilities shared by tests across the workspace.
//!
//! Test runs used to signal "the service ran" through process-wide flags
//! and build their host through ad-hoc lazy statics. Both patterns are
//! replaced here with explicitly constructed values: [`ScenarioFlags`] is a
//! per-run record passed by reference, and [`HostCell`] is a compute-once
//! cell that builds the shared host at most once even under concurrent
//! first access. [`CaptureHarness`] ties the two together as a small
//! capability set implemented by composition.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use capture::{CaptureConfig, CaptureRegistry};

/// Per-run scenario flags, reset explicitly instead of living in statics.
///
/// Collaborators flip these to record that they executed; assertions read
/// them after the run. Constructing a fresh value (or calling
/// [`reset`](Self::reset)) starts a clean run.
#[derive(Debug, Default)]
pub struct ScenarioFlags {
    service_ran: AtomicBool,
    initializer_started: AtomicBool,
}

impl ScenarioFlags {
    /// Creates a cleared flag set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that the service under test ran.
    pub fn mark_service_ran(&self) {
        self.service_ran.store(true, Ordering::SeqCst);
    }

    /// Reports whether the service under test ran.
    #[must_use]
    pub fn service_ran(&self) -> bool {
        self.service_ran.load(Ordering::SeqCst)
    }

    /// Records that the initializer started.
    pub fn mark_initializer_started(&self) {
        self.initializer_started.store(true, Ordering::SeqCst);
    }

    /// Reports whether the initializer started.
    #[must_use]
    pub fn initializer_started(&self) -> bool {
        self.initializer_started.load(Ordering::SeqCst)
    }

    /// Clears every flag for the next run.
    pub fn reset(&self) {
        self.service_ran.store(false, Ordering::SeqCst);
        self.initializer_started.store(false, Ordering::SeqCst);
    }
}

/// Compute-once cell for a shared host value.
///
/// The factory passed to [`get_or_build`](Self::get_or_build) runs at most
/// once, even when many threads race on first access; every caller gets the
/// same shared value afterwards.
///
/// # Examples
///
/// ```
/// use test_support::HostCell;
///
/// let cell: HostCell<String> = HostCell::new();
/// let first = cell.get_or_build(|| String::from("built"));
/// let second = cell.get_or_build(|| unreachable!("already built"));
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// ```
#[derive(Debug)]
pub struct HostCell<T> {
    slot: OnceLock<Arc<T>>,
}

impl<T> HostCell<T> {
    /// Creates an empty cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Returns the shared value, running `build` only on the first call.
    pub fn get_or_build<F>(&self, build: F) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        Arc::clone(self.slot.get_or_init(|| Arc::new(build())))
    }

    /// Returns the shared value when it has already been built.
    #[must_use]
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.get().map(Arc::clone)
    }
}

impl<T> Default for HostCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability set a test scenario implements to drive the capture host.
///
/// The three capabilities mirror what scenarios actually need: pick the
/// settings, build the host, and expose the shared host to the test body.
/// Scenarios implement the trait by composing [`HostCell`] and whatever
/// state they carry; there is no base-class hierarchy to extend.
pub trait CaptureHarness {
    /// Returns the settings the host is built with.
    fn configure(&self) -> CaptureConfig {
        CaptureConfig::default()
    }

    /// Builds the registry. Called at most once per harness.
    fn create(&self) -> CaptureRegistry {
        CaptureRegistry::new(self.configure())
    }

    /// Returns the shared registry, building it on first access.
    fn registry(&self) -> Arc<CaptureRegistry>;
}

/// Ready-made harness for scenarios without custom services.
///
/// # Examples
///
/// ```
/// use test_support::{BasicHarness, CaptureHarness};
///
/// let harness = BasicHarness::new();
/// harness.registry().logger("Setup").unwrap().info("ready");
/// assert_eq!(harness.registry().sink().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct BasicHarness {
    host: HostCell<CaptureRegistry>,
    flags: ScenarioFlags,
    config: CaptureConfig,
}

impl BasicHarness {
    /// Creates a harness with default capture settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a harness with explicit capture settings.
    #[must_use]
    pub fn with_config(config: CaptureConfig) -> Self {
        Self {
            host: HostCell::new(),
            flags: ScenarioFlags::new(),
            config,
        }
    }

    /// Returns this run's scenario flags.
    #[must_use]
    pub fn flags(&self) -> &ScenarioFlags {
        &self.flags
    }
}

impl CaptureHarness for BasicHarness {
    fn configure(&self) -> CaptureConfig {
        self.config.clone()
    }

    fn registry(&self) -> Arc<CaptureRegistry> {
        self.host.get_or_build(|| self.create())
    }
}
