use crate::{AppState, ClockTime, Effect, LookupFailure, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlInputChanged(text) => {
            state.set_url_input(text);
            Vec::new()
        }
        Msg::StartTimeChanged(raw) => {
            match raw.parse::<ClockTime>() {
                Ok(start) => state.set_window_start(start),
                Err(err) => state.set_error(format!("Invalid study start time: {err}")),
            }
            Vec::new()
        }
        Msg::EndTimeChanged(raw) => {
            match raw.parse::<ClockTime>() {
                Ok(end) => state.set_window_end(end),
                Err(err) => state.set_error(format!("Invalid study end time: {err}")),
            }
            Vec::new()
        }
        Msg::ClockTicked(now) => {
            state.set_now(now);
            Vec::new()
        }
        Msg::OpenUrlClicked => {
            // The gate is checked before the input so no lookup starts inside the window.
            if state.study_time_active() {
                state.set_error(LookupFailure::TimeWindowBlocked.message());
                return (state, Vec::new());
            }
            let url = state.url_input().trim().to_string();
            if url.is_empty() {
                state.set_error(LookupFailure::EmptyUrl.message());
                return (state, Vec::new());
            }
            let request_id = state.begin_lookup();
            vec![Effect::Lookup {
                request_id,
                url,
                window: state.window(),
            }]
        }
        Msg::ResetTimeClicked => {
            state.reset();
            Vec::new()
        }
        Msg::LookupCompleted { request_id, result } => {
            if !state.finish_lookup(request_id) {
                return (state, Vec::new());
            }
            match result {
                Ok(outcome) => state.apply_outcome(outcome),
                Err(failure) => state.set_error(failure.message()),
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
