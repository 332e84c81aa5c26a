//! # Humanize Common
//!
//! Shared ambient support for the humanize locale workspace.
//!
//! This crate carries the logging setup used by binaries and services that
//! embed the locale registry, plus test helpers shared by the other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use logging::{init_default_logging, init_dev_logging, init_logging, LoggingConfig};
