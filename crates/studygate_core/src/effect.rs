use crate::{RequestId, TimeWindow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Categorize `url`; the engine re-checks `window` before any network access.
    Lookup {
        request_id: RequestId,
        url: String,
        window: TimeWindow,
    },
}
