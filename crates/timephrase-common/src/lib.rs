//! # Timephrase Common
//!
//! Shared types, utilities, and common functionality for Timephrase.
//!
//! This crate provides the application-wide error type and the locale-name
//! helpers used by every other crate in the Timephrase workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use types::*;
pub use utils::*;
