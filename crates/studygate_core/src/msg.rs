use crate::{ClockTime, LookupFailure, LookupOutcome, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    UrlInputChanged(String),
    /// User edited the study start time picker (`HH:MM`).
    StartTimeChanged(String),
    /// User edited the study end time picker (`HH:MM`).
    EndTimeChanged(String),
    /// Front end reports the current wall-clock time.
    ClockTicked(ClockTime),
    /// User clicked "Open URL".
    OpenUrlClicked,
    /// User clicked "Reset Time".
    ResetTimeClicked,
    /// Engine finished a lookup.
    LookupCompleted {
        request_id: RequestId,
        result: Result<LookupOutcome, LookupFailure>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
