use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::models::Action;
use crate::domain::models::CheckerBox;
use crate::domain::models::Event;

#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

async fn run_check(checker: &CheckerBox, event_tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    let target = checker.target();
    let event = match checker.check().await {
        Ok(code) => {
            tracing::debug!(target_url = %target, status = code, "status check finished");
            Event::CheckStatus(code)
        }
        Err(err) => {
            tracing::error!(target_url = %target, error = ?err, "status check failed");
            Event::CheckError(err)
        }
    };

    event_tx.send(event)?;

    Ok(())
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        checker: CheckerBox,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let checker_arc = Arc::new(checker);
        let mut worker: Option<JoinHandle<Result<()>>> = None;

        while let Some(action) = rx.recv().await {
            match action {
                Action::CheckTarget => {
                    if let Some(handle) = worker.as_ref() {
                        if !handle.is_finished() {
                            tracing::debug!("status check already in flight");
                            continue;
                        }
                    }

                    let checker_worker = checker_arc.clone();
                    let worker_event_tx = event_tx.clone();
                    worker = Some(tokio::spawn(async move {
                        return run_check(&checker_worker, &worker_event_tx).await;
                    }));
                }
            }
        }

        Ok(())
    }
}
