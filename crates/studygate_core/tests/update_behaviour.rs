use std::sync::Once;

use pretty_assertions::assert_eq;
use studygate_core::{
    update, AppState, ClockTime, Effect, LookupFailure, LookupOutcome, Msg, TimeWindow,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn at(raw: &str) -> Msg {
    Msg::ClockTicked(raw.parse().unwrap())
}

fn apply(state: AppState, msgs: Vec<Msg>) -> (AppState, Vec<Effect>) {
    msgs.into_iter().fold((state, Vec::new()), |(state, _), msg| update(state, msg))
}

fn submit_url(state: AppState, url: &str) -> (AppState, Vec<Effect>) {
    apply(
        state,
        vec![Msg::UrlInputChanged(url.to_string()), Msg::OpenUrlClicked],
    )
}

fn outcome(leaf: &str) -> LookupOutcome {
    LookupOutcome {
        filtering_taxonomy: vec![format!("Category name: News > {leaf}")],
        leaf_category: Some(leaf.to_string()),
        response_preview: "{}".to_string(),
    }
}

#[test]
fn open_inside_study_window_is_blocked_without_effects() {
    init_logging();
    let (state, _) = update(AppState::new(), at("10:00"));
    assert!(state.view().study_time_active);

    let (state, effects) = submit_url(state, "https://example.com");

    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.lookup_pending);
    assert_eq!(
        view.error_message,
        Some(LookupFailure::TimeWindowBlocked.message())
    );
}

#[test]
fn open_outside_study_window_emits_lookup() {
    init_logging();
    let (state, _) = update(AppState::new(), at("20:00"));
    assert!(!state.view().study_time_active);

    let (state, effects) = submit_url(state, "  https://example.com ");

    assert_eq!(
        effects,
        vec![Effect::Lookup {
            request_id: 1,
            url: "https://example.com".to_string(),
            window: TimeWindow::default(),
        }]
    );
    assert!(state.view().lookup_pending);
    assert_eq!(state.view().error_message, None);
}

#[test]
fn empty_url_sets_error_and_emits_nothing() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "   ");

    assert!(effects.is_empty());
    assert_eq!(
        state.view().error_message,
        Some(LookupFailure::EmptyUrl.message())
    );
}

#[test]
fn editing_window_recomputes_gate() {
    init_logging();
    let (state, _) = update(AppState::new(), at("20:00"));
    assert!(!state.view().study_time_active);

    let (state, _) = update(state, Msg::EndTimeChanged("21:00".to_string()));
    assert!(state.view().study_time_active);

    let (state, _) = update(state, Msg::StartTimeChanged("20:01".to_string()));
    assert!(!state.view().study_time_active);
    assert_eq!(state.view().window.start.to_string(), "20:01");
}

#[test]
fn invalid_time_keeps_previous_window() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::StartTimeChanged("25:00".to_string()));

    let view = state.view();
    assert_eq!(view.window, TimeWindow::default());
    assert!(view
        .error_message
        .unwrap()
        .starts_with("Invalid study start time"));
}

#[test]
fn completed_lookup_populates_view() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "https://example.com");
    let Effect::Lookup { request_id, .. } = effects[0].clone();

    let (mut state, _) = update(
        state,
        Msg::LookupCompleted {
            request_id,
            result: Ok(outcome("Sports")),
        },
    );

    let view = state.view();
    assert!(!view.lookup_pending);
    assert_eq!(view.error_message, None);
    assert_eq!(
        view.filtering_taxonomy,
        vec!["Category name: News > Sports".to_string()]
    );
    assert_eq!(view.leaf_category.as_deref(), Some("Sports"));
    assert_eq!(view.response_preview.as_deref(), Some("{}"));
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn blocked_category_failure_is_shown() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://example.com");
    let (state, _) = update(
        state,
        Msg::LookupCompleted {
            request_id: 1,
            result: Err(LookupFailure::BlockedCategory("Adult".to_string())),
        },
    );

    let view = state.view();
    assert_eq!(
        view.error_message.as_deref(),
        Some("Cannot open the page. Category is 'Adult'.")
    );
    assert!(view.filtering_taxonomy.is_empty());
    assert_eq!(view.response_preview, None);
}

#[test]
fn stale_completion_is_discarded() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://first.example.com");
    let (state, effects) = submit_url(state, "https://second.example.com");
    let Effect::Lookup { request_id, .. } = effects[0].clone();
    assert_eq!(request_id, 2);

    let (state, _) = update(
        state,
        Msg::LookupCompleted {
            request_id: 2,
            result: Ok(outcome("Second")),
        },
    );
    let (mut state, _) = update(
        state,
        Msg::LookupCompleted {
            request_id: 1,
            result: Ok(outcome("First")),
        },
    );

    assert_eq!(state.view().leaf_category.as_deref(), Some("Second"));
    state.consume_dirty();
    let (mut state, _) = update(
        state,
        Msg::LookupCompleted {
            request_id: 1,
            result: Err(LookupFailure::NetworkFailure),
        },
    );
    assert!(!state.consume_dirty());
}

#[test]
fn input_change_clears_results_but_keeps_leaf() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://example.com");
    let (state, _) = update(
        state,
        Msg::LookupCompleted {
            request_id: 1,
            result: Ok(outcome("Sports")),
        },
    );

    let (state, _) = update(state, Msg::UrlInputChanged("https://other.example".to_string()));

    let view = state.view();
    assert_eq!(view.url_input, "https://other.example");
    assert!(view.filtering_taxonomy.is_empty());
    assert_eq!(view.response_preview, None);
    assert_eq!(view.error_message, None);
    assert_eq!(view.leaf_category.as_deref(), Some("Sports"));
}

#[test]
fn reset_restores_defaults_and_clears_everything() {
    init_logging();
    let (state, _) = apply(
        AppState::new(),
        vec![
            at("20:00"),
            Msg::StartTimeChanged("19:00".to_string()),
            Msg::EndTimeChanged("22:00".to_string()),
        ],
    );
    assert!(state.view().study_time_active);

    // A result that landed before the window was edited.
    let (state, _) = apply(
        state,
        vec![
            Msg::StartTimeChanged("21:00".to_string()),
            Msg::UrlInputChanged("https://example.com".to_string()),
            Msg::OpenUrlClicked,
            Msg::LookupCompleted {
                request_id: 1,
                result: Ok(outcome("Sports")),
            },
            Msg::StartTimeChanged("19:00".to_string()),
            Msg::OpenUrlClicked,
        ],
    );
    assert!(state.view().error_message.is_some());
    assert_eq!(state.view().leaf_category.as_deref(), Some("Sports"));

    let (state, effects) = update(state, Msg::ResetTimeClicked);

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.window, TimeWindow::default());
    assert!(!view.study_time_active);
    assert_eq!(view.error_message, None);
    assert!(view.filtering_taxonomy.is_empty());
    assert_eq!(view.leaf_category, None);
    assert_eq!(view.response_preview, None);
}

#[test]
fn reset_forgets_outstanding_lookup() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://example.com");
    let (state, _) = update(state, Msg::ResetTimeClicked);
    assert!(!state.view().lookup_pending);

    let (state, _) = update(
        state,
        Msg::LookupCompleted {
            request_id: 1,
            result: Ok(outcome("Late")),
        },
    );
    assert_eq!(state.view().leaf_category, None);
}

#[test]
fn gate_reactivates_on_next_tick_after_reset() {
    init_logging();
    let now: ClockTime = "10:00".parse().unwrap();
    let (state, _) = update(AppState::new(), Msg::ClockTicked(now));
    let (state, _) = update(state, Msg::ResetTimeClicked);
    assert!(!state.view().study_time_active);

    let (state, _) = update(state, Msg::ClockTicked(now));
    assert!(state.view().study_time_active);
}

#[test]
fn window_edit_requests_render_even_when_gate_unchanged() {
    init_logging();
    let (mut state, _) = update(AppState::new(), at("20:00"));
    state.consume_dirty();

    let (mut state, _) = update(state, Msg::StartTimeChanged("08:00".to_string()));

    assert!(!state.view().study_time_active);
    assert_eq!(state.view().window.start.to_string(), "08:00");
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::EndTimeChanged("18:30".to_string()));
    assert_eq!(state.view().window.end.to_string(), "18:30");
    assert!(state.consume_dirty());
}

#[test]
fn valid_time_edit_clears_previous_parse_error() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::StartTimeChanged("25:00".to_string()));
    assert!(state.view().error_message.is_some());

    let (state, _) = update(state, Msg::StartTimeChanged("08:00".to_string()));

    let view = state.view();
    assert_eq!(view.error_message, None);
    assert_eq!(view.window.start.to_string(), "08:00");
}
