//! Configuration management for the status checker.
//!
//! This module provides a single registry for the values the checker and the
//! view share, such as the target URL and the request timeout.

mod config;

pub use config::*;
