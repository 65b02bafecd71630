//! Core types and trait definitions for the Madori floor-plan store.
//!
//! This crate is deliberately free of HTTP and file-system dependencies.
//! The schema normalizer, the storage backend, and the API all depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod asset;
pub mod catalog;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod instance;
pub mod palette;
pub mod project;
pub mod store;

mod nullable;

pub use error::{Error, Result};
