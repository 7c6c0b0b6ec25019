//! # Timephrase Config
//!
//! Type-safe locale configuration for Timephrase.
//!
//! This crate provides configuration loading, validation, and caching
//! with atomic updates, and resolves the configured locale with fallback.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod loader;
pub mod resolver;
pub mod schema;
pub mod validator;

pub use cache::*;
pub use defaults::*;
pub use loader::*;
pub use resolver::*;
pub use schema::*;
pub use validator::*;
