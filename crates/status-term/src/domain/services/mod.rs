pub mod actions;
mod app_state;
pub mod events;

pub use actions::ActionsService;
pub use app_state::*;
pub use events::EventsService;
