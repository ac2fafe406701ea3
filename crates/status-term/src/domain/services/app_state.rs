use crate::domain::models::status_text;
use crate::domain::models::CheckState;
use crate::domain::models::Event;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

pub struct AppStateProps {
    pub target: String,
}

pub struct AppState {
    pub target: String,
    pub check: CheckState,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(props: AppStateProps) -> AppState {
        return AppState {
            target: props.target,
            check: CheckState::Idle,
            should_quit: false,
        };
    }

    /// Applies a single event and reports whether the loop should stop. Once a
    /// stop has been requested the state is frozen and later events are
    /// dropped.
    pub fn handle_event(&mut self, event: Event) -> bool {
        if self.should_quit {
            tracing::debug!(?event, "dropping event after quit");
            return true;
        }

        match event {
            Event::CheckStatus(code) => {
                self.check = CheckState::Resolved(code);
                self.should_quit = true;
            }
            Event::CheckError(err) => {
                self.check = CheckState::Failed(err);
                self.should_quit = true;
            }
            Event::KeyboardCTRLC => {
                self.should_quit = true;
            }
            Event::KeyboardInput(_) | Event::UIResize | Event::UITick => {}
        }

        return self.should_quit;
    }

    pub fn status(&self) -> Option<u16> {
        return self.check.status();
    }

    pub fn error(&self) -> Option<&anyhow::Error> {
        return self.check.error();
    }

    pub fn view(&self) -> String {
        if let Some(err) = self.error() {
            return format!("We had some trouble: {err:#}");
        }

        let mut text = format!("Checking {} ... ", self.target);
        if let Some(code) = self.status() {
            text += &format!("{code} {}!", status_text(code));
        }

        return text;
    }
}
