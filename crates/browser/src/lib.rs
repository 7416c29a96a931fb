//! Headless Chromium session management.
//!
//! [`BrowserSession`] wraps chromiumoxide: it launches a dedicated headless
//! Chromium process, drives the DevTools protocol event loop on a spawned
//! task, and hands out [`chromiumoxide::Page`] handles for navigation and
//! script evaluation. Sessions are short-lived: the scanner launches a
//! fresh browser per page and closes it when the scan is done.

pub mod error;
pub mod session;

pub use error::BrowserError;
pub use session::{evaluate_json, BrowserSession, SessionConfig};
