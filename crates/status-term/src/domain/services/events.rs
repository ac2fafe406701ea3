use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time;

use crate::domain::models::Event;

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

pub struct EventsService {
    crossterm_events: Option<EventStream>,
    events: mpsc::UnboundedReceiver<Event>,
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: Some(EventStream::new()),
            events,
        };
    }

    /// Only listens to the internal channel and the UI tick. Used when no
    /// terminal input is attached.
    pub fn without_terminal(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: None,
            events,
        };
    }

    fn handle_crossterm(event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Resize(_, _) => {
                return Some(Event::UIResize);
            }
            CrosstermEvent::Key(keyevent) => {
                if keyevent.kind == KeyEventKind::Release {
                    return None;
                }

                if keyevent.code == KeyCode::Char('c')
                    && keyevent.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Some(Event::KeyboardCTRLC);
                }

                return Some(Event::KeyboardInput(keyevent));
            }
            _ => return None,
        }
    }

    async fn next_crossterm(
        crossterm_events: &mut Option<EventStream>,
    ) -> Option<std::io::Result<CrosstermEvent>> {
        match crossterm_events {
            Some(stream) => return stream.next().await,
            None => return futures::future::pending().await,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => event,
                event = EventsService::next_crossterm(&mut self.crossterm_events) => match event {
                    Some(Ok(input)) => EventsService::handle_crossterm(input),
                    Some(Err(err)) => {
                        tracing::error!(error = ?err, "failed to read terminal event");
                        None
                    }
                    None => None
                },
                _ = time::sleep(time::Duration::from_millis(500)) => Some(Event::UITick)
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
