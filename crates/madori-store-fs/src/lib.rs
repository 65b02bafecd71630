//! File-system backend for the Madori document store.
//!
//! Each document is one JSON file in a data directory. All access goes
//! through a single async lock, and writes replace files atomically.

mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::FsStore;

#[cfg(test)]
mod tests;
