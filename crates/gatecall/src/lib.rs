//! # Gatecall
//!
//! Command-line front end: reads the flight details, renders the selected
//! announcement in every enabled language, prints it and optionally reads one
//! language aloud.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod output;

pub use app::{generate, run, Generated};
pub use cli::{Cli, OutputFormat};
