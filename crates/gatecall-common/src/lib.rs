//! # Gatecall Common
//!
//! Shared types, errors, and logging for the Gatecall workspace.
//!
//! This crate provides the domain vocabulary (languages, announcement
//! templates, boarding groups, requests and rendered output) used by every
//! other crate in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{GatecallError, Result};
pub use logging::{init_logging, LoggingConfig};
pub use types::*;
