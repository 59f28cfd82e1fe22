use crate::time_gate::{is_blocked, ClockTime, TimeWindow};
use crate::view_model::AppViewModel;
use crate::{LookupOutcome, RequestId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url_input: String,
    window: TimeWindow,
    now: Option<ClockTime>,
    study_time_active: bool,
    next_request_id: RequestId,
    pending_request: Option<RequestId>,
    error_message: Option<String>,
    filtering_taxonomy: Vec<String>,
    leaf_category: Option<String>,
    response_preview: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            url_input: self.url_input.clone(),
            window: self.window,
            study_time_active: self.study_time_active,
            lookup_pending: self.pending_request.is_some(),
            error_message: self.error_message.clone(),
            filtering_taxonomy: self.filtering_taxonomy.clone(),
            leaf_category: self.leaf_category.clone(),
            response_preview: self.response_preview.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is needed and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn study_time_active(&self) -> bool {
        self.study_time_active
    }

    pub(crate) fn set_url_input(&mut self, text: String) {
        self.url_input = text;
        self.error_message = None;
        self.filtering_taxonomy.clear();
        self.response_preview = None;
        self.dirty = true;
    }

    pub(crate) fn set_window_start(&mut self, start: ClockTime) {
        self.window.start = start;
        self.window_edited();
    }

    pub(crate) fn set_window_end(&mut self, end: ClockTime) {
        self.window.end = end;
        self.window_edited();
    }

    /// A valid edit replaces any earlier time-parse banner and always re-renders.
    fn window_edited(&mut self) {
        self.error_message = None;
        self.dirty = true;
        self.recompute_gate();
    }

    pub(crate) fn set_now(&mut self, now: ClockTime) {
        self.now = Some(now);
        self.recompute_gate();
    }

    /// Without a known time the gate stays open.
    fn recompute_gate(&mut self) {
        let active = self
            .now
            .is_some_and(|now| is_blocked(now, &self.window));
        if active != self.study_time_active {
            self.study_time_active = active;
            self.dirty = true;
        }
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.dirty = true;
    }

    pub(crate) fn begin_lookup(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.pending_request = Some(request_id);
        self.dirty = true;
        request_id
    }

    /// Claims the pending slot if `request_id` is the latest lookup.
    pub(crate) fn finish_lookup(&mut self, request_id: RequestId) -> bool {
        if self.pending_request != Some(request_id) {
            return false;
        }
        self.pending_request = None;
        self.dirty = true;
        true
    }

    pub(crate) fn apply_outcome(&mut self, outcome: LookupOutcome) {
        self.error_message = None;
        self.filtering_taxonomy = outcome.filtering_taxonomy;
        self.leaf_category = outcome.leaf_category;
        self.response_preview = Some(outcome.response_preview);
        self.dirty = true;
    }

    /// Restores the default window, disables the gate and clears all results.
    pub(crate) fn reset(&mut self) {
        self.window = TimeWindow::default();
        self.study_time_active = false;
        self.pending_request = None;
        self.error_message = None;
        self.filtering_taxonomy.clear();
        self.leaf_category = None;
        self.response_preview = None;
        self.dirty = true;
    }
}
