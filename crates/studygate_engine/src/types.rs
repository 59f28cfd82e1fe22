use serde::Serialize;
use serde_json::Value;
use studygate_core::RequestId;
use thiserror::Error;

/// One categorization lookup. Carries no credential; the client adds the key
/// while encoding the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizationRequest {
    pub query: String,
    pub data_type: &'static str,
}

impl CategorizationRequest {
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            query: url.into(),
            data_type: "url",
        }
    }
}

/// Response fields that are safe to show. Absent fields are omitted, JSON
/// `null` is kept.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RedactedResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iab_taxonomy: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_taxonomy: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_credits: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_credits: Option<Value>,
}

impl RedactedResponse {
    pub fn from_response(response: &Value) -> Self {
        let field = |key: &str| response.get(key).cloned();
        Self {
            iab_taxonomy: field("iab_taxonomy"),
            content_taxonomy: field("content_taxonomy"),
            classification: field("classification"),
            category: field("category"),
            status: field("status"),
            total_credits: field("total_credits"),
            remaining_credits: field("remaining_credits"),
        }
    }

    pub fn to_pretty_json(&self) -> String {
        // Serializing a struct of `serde_json::Value`s cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorizationOutcome {
    pub request_id: RequestId,
    pub filtering_taxonomy: Vec<String>,
    pub leaf_category: Option<String>,
    pub response: RedactedResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategorizeError {
    #[error("lookups are disabled during study time")]
    TimeWindowBlocked,
    #[error("url is empty")]
    EmptyUrl,
    #[error("network failure: {0}")]
    NetworkFailure(String),
    #[error("invalid api response format")]
    InvalidResponseShape,
    #[error("blocked category {0:?}")]
    BlockedCategory(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    LookupCompleted {
        request_id: RequestId,
        result: Result<CategorizationOutcome, CategorizeError>,
    },
}
