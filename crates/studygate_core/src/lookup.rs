use std::fmt;

/// Monotonic token attached to every lookup.
pub type RequestId = u64;

/// Display-ready result of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    pub filtering_taxonomy: Vec<String>,
    pub leaf_category: Option<String>,
    /// Pretty-printed redacted API response.
    pub response_preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    TimeWindowBlocked,
    EmptyUrl,
    NetworkFailure,
    InvalidResponseShape,
    BlockedCategory(String),
}

impl LookupFailure {
    /// Text for the error banner.
    pub fn message(&self) -> String {
        match self {
            LookupFailure::TimeWindowBlocked => {
                "Study time is enabled. You cannot open websites during this time.".to_string()
            }
            LookupFailure::EmptyUrl => "Enter a URL to look up.".to_string(),
            LookupFailure::NetworkFailure => {
                "Could not reach the categorization service.".to_string()
            }
            LookupFailure::InvalidResponseShape => "Invalid API response format.".to_string(),
            LookupFailure::BlockedCategory(category) => {
                format!("Cannot open the page. Category is '{category}'.")
            }
        }
    }
}

impl fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
