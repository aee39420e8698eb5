//! Common test utilities.
//!
//! This module provides fixture trees of Pleiades-style JSON documents.

pub mod fixtures;
