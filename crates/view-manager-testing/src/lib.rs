//! Headless testing utilities for `view-manager`.
//!
//! [`MockToolkit`] stands in for the UI library: it records every screen load
//! and, like a real toolkit, keeps the outgoing screen alive until its
//! transition finishes. [`MockPage`] counts creations and records which
//! objects were released through `deinit`.
//!
//! # Quick start
//!
//! ```
//! use view_manager::ViewManager;
//! use view_manager_testing::{MockPage, MockToolkit};
//!
//! let home = MockPage::new("home");
//! let settings = MockPage::new("settings");
//! let mut nav: ViewManager<'_, MockToolkit<'_>> = ViewManager::new(MockToolkit::new());
//!
//! nav.switch_to(&home);
//! nav.switch_to(&settings);
//! nav.toolkit_mut().finish_transitions();
//!
//! assert_eq!(home.released().len(), 1);
//! assert_eq!(nav.toolkit().live_objects().len(), 1);
//! ```

#![warn(clippy::all)]
#![warn(clippy::dbg_macro)]
#![allow(clippy::module_name_repetitions)]

mod mock;

pub use mock::{LoadRecord, MockPage, MockToolkit, ObjId};

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Honours `RUST_LOG`; defaults to `debug`. Safe to call from every test.
pub fn init_test_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

    // A second call fails because a global subscriber already exists.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_test_writer()
        .try_init();
}
