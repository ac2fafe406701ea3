//! Terminal status checker.
//!
//! This crate checks the HTTP status of a single target from the terminal. A
//! background worker performs the request while a message-driven UI loop
//! renders the outcome and exits as soon as it is known, or when the user
//! presses CTRL+C.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, CheckState, Checker, CheckerBox, Event};
pub use domain::services::{AppState, AppStateProps};
pub use infrastructure::clients::CheckerManager;
