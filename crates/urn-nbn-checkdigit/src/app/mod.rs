//! Application layer - Use case implementations
//!
//! This module applies the domain functions to collections of identifiers.

pub mod batch;
