//! Core domain logic for the status checker.
//!
//! This module contains the state machine and data models that drive the
//! terminal UI, independent of the terminal and the HTTP client.

pub mod models;
pub mod services;
