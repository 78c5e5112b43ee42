//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod check_digit;
pub mod error;
pub mod mapping;
