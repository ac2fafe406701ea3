mod action;
mod check_state;
mod checker;
mod event;

pub use action::*;
pub use check_state::*;
pub use checker::*;
pub use event::*;
