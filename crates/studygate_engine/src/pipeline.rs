use std::sync::Arc;

use chrono::Timelike;
use engine_logging::{engine_error, engine_info, engine_warn};
use studygate_core::{is_blocked, ClockTime, RequestId, TimeWindow, DEFAULT_WINDOW_START};

use crate::client::CategorizationClient;
use crate::navigate::Navigator;
use crate::taxonomy::{blocked_category, extract_leaf, filtering_taxonomy};
use crate::{CategorizationOutcome, CategorizationRequest, CategorizeError, RedactedResponse};

const LEAF_FIELD: &str = "iab_taxonomy";

pub trait Clock: Send + Sync {
    fn now(&self) -> ClockTime;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> ClockTime {
        let now = chrono::Local::now();
        // chrono keeps hour < 24 and minute < 60, so the fallback is unreachable.
        ClockTime::new(now.hour(), now.minute()).unwrap_or(DEFAULT_WINDOW_START)
    }
}

/// Gate check, API call, policy and shaping for a single URL.
#[derive(Clone)]
pub struct Categorizer {
    client: Arc<dyn CategorizationClient>,
    navigator: Arc<dyn Navigator>,
    clock: Arc<dyn Clock>,
}

impl Categorizer {
    pub fn new(
        client: Arc<dyn CategorizationClient>,
        navigator: Arc<dyn Navigator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            client,
            navigator,
            clock,
        }
    }

    pub async fn categorize(
        &self,
        request_id: RequestId,
        url: &str,
        window: &TimeWindow,
    ) -> Result<CategorizationOutcome, CategorizeError> {
        let now = self.clock.now();
        if is_blocked(now, window) {
            engine_info!(
                "Lookup {} refused at {}: study window {}-{}",
                request_id,
                now,
                window.start,
                window.end
            );
            return Err(CategorizeError::TimeWindowBlocked);
        }

        let url = url.trim();
        if url.is_empty() {
            return Err(CategorizeError::EmptyUrl);
        }

        let request = CategorizationRequest::for_url(url);
        let response = self
            .client
            .call(&request)
            .await
            .inspect_err(|err| engine_error!("Lookup {} failed: {}", request_id, err))?;

        let taxonomy = filtering_taxonomy(&response)
            .inspect_err(|_| engine_warn!("Lookup {}: malformed filtering_taxonomy", request_id))?;

        if let Some(category) = blocked_category(&taxonomy) {
            engine_info!("Lookup {}: blocked category {}", request_id, category);
            return Err(CategorizeError::BlockedCategory(category.to_string()));
        }

        if let Err(err) = self.navigator.open(url) {
            engine_warn!("Lookup {}: could not open {}: {}", request_id, url, err);
        }

        Ok(CategorizationOutcome {
            request_id,
            leaf_category: extract_leaf(&response, LEAF_FIELD),
            filtering_taxonomy: taxonomy,
            response: RedactedResponse::from_response(&response),
        })
    }
}
