#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use std::future::Future;
use std::io;
use std::io::Write;

use anyhow::anyhow;
use anyhow::Result;
use crossterm::cursor;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::TerminalOptions;
use ratatui::Viewport;
use tokio::sync::mpsc;
use tokio::task;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::CheckerBox;
use crate::domain::models::Event;
use crate::domain::services::ActionsService;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;
use crate::domain::services::EventsService;

/// Rows reserved below the prompt while the check runs. The final view is
/// printed in full once the loop exits, so only the pending line has to fit.
const VIEWPORT_HEIGHT: u16 = 4;

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

fn render(frame: &mut Frame, app_state: &AppState) {
    let [_, body] = Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(frame.area());

    frame.render_widget(
        Paragraph::new(app_state.view()).wrap(Wrap { trim: false }),
        body,
    );
}

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state_props: AppStateProps,
    tx: mpsc::UnboundedSender<Action>,
    mut events: EventsService,
) -> Result<AppState> {
    let mut app_state = AppState::new(app_state_props);
    tx.send(Action::CheckTarget)?;

    loop {
        terminal.draw(|frame| render(frame, &app_state))?;

        let event = events.next().await?;
        if app_state.handle_event(event) {
            break;
        }
    }

    terminal.draw(|frame| render(frame, &app_state))?;
    tracing::debug!(
        status = app_state.status(),
        failed = app_state.error().is_some(),
        "ui loop finished"
    );

    return Ok(app_state);
}

/// Wipes the inline viewport and leaves the cursor on its first row.
fn clear_viewport<B: Backend>(terminal: &mut Terminal<B>) -> Result<()> {
    terminal.clear()?;
    terminal.show_cursor()?;

    return Ok(());
}

/// Writes the final view as plain lines so the terminal wraps it and nothing
/// is cut off by the viewport height.
fn write_final_view<W: Write>(out: &mut W, app_state: &AppState) -> Result<()> {
    write!(out, "\n{}\n\n", app_state.view())?;
    out.flush()?;

    return Ok(());
}

async fn run_terminal(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<AppState> {
    enable_raw_mode()?;

    let term_backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        term_backend,
        TerminalOptions {
            viewport: Viewport::Inline(VIEWPORT_HEIGHT),
        },
    )?;

    let app_state_props = AppStateProps {
        target: Config::get(ConfigKey::TargetUrl),
    };

    let result = start_loop(&mut terminal, app_state_props, tx, EventsService::new(rx)).await;

    clear_viewport(&mut terminal)?;
    disable_raw_mode()?;

    if let Ok(app_state) = result.as_ref() {
        write_final_view(&mut io::stdout(), app_state)?;
    }

    return result;
}

/// Runs the status check and the terminal loop side by side until the loop
/// exits. A failed check is a normal outcome; only terminal failures are
/// returned as errors.
pub async fn start(checker: CheckerBox) -> Result<AppState> {
    return start_with_ui(checker, run_terminal).await;
}

async fn start_with_ui<F, Fut>(checker: CheckerBox, ui: F) -> Result<AppState>
where
    F: FnOnce(mpsc::UnboundedSender<Action>, mpsc::UnboundedReceiver<Event>) -> Fut,
    Fut: Future<Output = Result<AppState>>,
{
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();
    background_futures
        .spawn(async move { ActionsService::start(checker, event_tx, &mut action_rx).await });

    let ui_future = ui(action_tx, event_rx);

    let result = tokio::select!(
        res = background_futures.join_next() => match res {
            Some(Ok(Err(err))) => Err(err),
            Some(Err(err)) => Err(err.into()),
            _ => Err(anyhow!("Actions service stopped before the UI finished")),
        },
        res = ui_future => res,
    );

    if let Err(err) = result.as_ref() {
        tracing::error!(error = ?err, "terminal loop failed");
        destruct_terminal_for_panic();
    }

    return result;
}
