//! # Docstore Testkit
//!
//! Test utilities for the docstore crates.
//!
//! This crate provides:
//! - Store fixtures with pre-populated collections
//! - Property-based generators for collection names and arbitrary JSON
//!   payloads, built on proptest
//!
//! ## Usage
//!
//! ```
//! use docstore_testkit::prelude::*;
//!
//! let store = TestStore::with_collections(&[("users", 3)]);
//! assert_eq!(store.registry.stats().documents, 3);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
