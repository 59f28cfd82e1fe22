//! StudyGate engine: categorization API client, response pipeline and effect execution.
mod client;
mod engine;
mod navigate;
mod pipeline;
mod taxonomy;
mod types;

pub use client::{CategorizationClient, ClientSettings, ReqwestClient, DEFAULT_ENDPOINT};
pub use engine::{EngineError, EngineHandle};
pub use navigate::{normalize_url, NavigateError, Navigator, SystemNavigator};
pub use pipeline::{Categorizer, Clock, LocalClock};
pub use taxonomy::{blocked_category, extract_leaf, filtering_taxonomy};
pub use types::{
    CategorizationOutcome, CategorizationRequest, CategorizeError, EngineEvent, RedactedResponse,
};
