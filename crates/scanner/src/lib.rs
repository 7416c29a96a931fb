//! Axe-core scan orchestration.
//!
//! [`Scanner`] owns the axe-core bundle and runs the scan sequence for a
//! URL: launch a fresh browser, navigate, inject axe, run it against the
//! document, and collect the deserialized results. [`Scanner::scan_all`]
//! walks a URL list sequentially, logging and skipping pages that fail so
//! one broken page never costs the rest of the run.

pub mod config;
pub mod runner;

pub use config::ScannerConfig;
pub use runner::{ScanError, Scanner};
