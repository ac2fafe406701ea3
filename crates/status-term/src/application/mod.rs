//! Application layer driving the terminal interface.
//!
//! This module handles command-line parsing and the main UI loop, and wires
//! the domain services to the terminal.

pub mod cli;
pub mod ui;
