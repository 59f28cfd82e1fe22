use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Duration;

use engine_logging::engine_info;
use studygate_core::{RequestId, TimeWindow};
use thiserror::Error;

use crate::pipeline::Categorizer;
use crate::EngineEvent;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("engine stopped")]
    Stopped,
}

enum EngineCommand {
    Lookup {
        request_id: RequestId,
        url: String,
        window: TimeWindow,
    },
}

/// Runs lookups on a background tokio runtime and reports completions.
pub struct EngineHandle {
    cmd_tx: Mutex<Option<mpsc::Sender<EngineCommand>>>,
    event_rx: Mutex<mpsc::Receiver<EngineEvent>>,
}

impl EngineHandle {
    pub fn new(categorizer: Categorizer) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let categorizer = categorizer.clone();
                let event_tx = event_tx.clone();
                // Lookups are independent tasks; the state machine fences stale results.
                runtime.spawn(async move {
                    handle_command(&categorizer, command, event_tx).await;
                });
            }
            engine_info!("Engine command channel closed; stopping runtime");
        });

        Ok(Self {
            cmd_tx: Mutex::new(Some(cmd_tx)),
            event_rx: Mutex::new(event_rx),
        })
    }

    pub fn lookup(
        &self,
        request_id: RequestId,
        url: impl Into<String>,
        window: TimeWindow,
    ) -> Result<(), EngineError> {
        let guard = self.cmd_tx.lock().map_err(|_| EngineError::Stopped)?;
        let cmd_tx = guard.as_ref().ok_or(EngineError::Stopped)?;
        cmd_tx
            .send(EngineCommand::Lookup {
                request_id,
                url: url.into(),
                window,
            })
            .map_err(|_| EngineError::Stopped)
    }

    /// `Ok(None)` when nothing completed within `timeout`; `Err(Stopped)` once
    /// the engine thread and all its lookups are gone.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<EngineEvent>, EngineError> {
        let event_rx = self.event_rx.lock().map_err(|_| EngineError::Stopped)?;
        match event_rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(EngineError::Stopped),
        }
    }

    /// Stops accepting lookups. The runtime is dropped, cancelling lookups
    /// still in flight.
    pub fn shutdown(&self) {
        if let Ok(mut cmd_tx) = self.cmd_tx.lock() {
            cmd_tx.take();
        }
    }
}

async fn handle_command(
    categorizer: &Categorizer,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Lookup {
            request_id,
            url,
            window,
        } => {
            let result = categorizer.categorize(request_id, &url, &window).await;
            let _ = event_tx.send(EngineEvent::LookupCompleted { request_id, result });
        }
    }
}
