use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use engine_logging::{engine_error, engine_info, engine_warn};
use studygate_core::{Effect, LookupFailure, LookupOutcome, Msg};
use studygate_engine::{
    CategorizationOutcome, CategorizeError, Categorizer, EngineEvent, EngineHandle,
};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: Arc<EngineHandle>,
    msg_tx: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(categorizer: Categorizer, msg_tx: mpsc::Sender<AppEvent>) -> anyhow::Result<Self> {
        let engine = EngineHandle::new(categorizer).context("starting lookup engine")?;
        let runner = Self {
            engine: Arc::new(engine),
            msg_tx,
        };
        runner.spawn_event_loop();
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Lookup {
                    request_id,
                    url,
                    window,
                } => {
                    engine_info!(
                        "Lookup request_id={} url_len={} url={}",
                        request_id,
                        url.len(),
                        url
                    );
                    if let Err(err) = self.engine.lookup(request_id, url, window) {
                        engine_error!("Lookup {} not queued: {}", request_id, err);
                        // Settle the pending lookup so the UI does not wait forever.
                        let _ = self.msg_tx.send(AppEvent::Msg(Msg::LookupCompleted {
                            request_id,
                            result: Err(LookupFailure::NetworkFailure),
                        }));
                    }
                }
            }
        }
    }

    pub fn shutdown(&self) {
        self.engine.shutdown();
    }

    fn spawn_event_loop(&self) {
        let engine = self.engine.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            let event = match engine.recv_timeout(Duration::from_millis(200)) {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(err) => {
                    engine_warn!("Engine event loop exiting: {}", err);
                    break;
                }
            };
            match event {
                EngineEvent::LookupCompleted { request_id, result } => {
                    let result = match result {
                        Ok(outcome) => Ok(map_outcome(outcome)),
                        Err(err) => {
                            engine_warn!("Lookup {} failed: {}", request_id, err);
                            Err(map_failure(err))
                        }
                    };
                    if msg_tx
                        .send(AppEvent::Msg(Msg::LookupCompleted { request_id, result }))
                        .is_err()
                    {
                        break;
                    }
                }
            }
        });
    }
}

fn map_outcome(outcome: CategorizationOutcome) -> LookupOutcome {
    LookupOutcome {
        response_preview: outcome.response.to_pretty_json(),
        filtering_taxonomy: outcome.filtering_taxonomy,
        leaf_category: outcome.leaf_category,
    }
}

fn map_failure(err: CategorizeError) -> LookupFailure {
    match err {
        CategorizeError::TimeWindowBlocked => LookupFailure::TimeWindowBlocked,
        CategorizeError::EmptyUrl => LookupFailure::EmptyUrl,
        CategorizeError::NetworkFailure(_) => LookupFailure::NetworkFailure,
        CategorizeError::InvalidResponseShape => LookupFailure::InvalidResponseShape,
        CategorizeError::BlockedCategory(category) => LookupFailure::BlockedCategory(category),
    }
}
