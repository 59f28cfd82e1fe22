use crate::TimeWindow;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub url_input: String,
    pub window: TimeWindow,
    pub study_time_active: bool,
    pub lookup_pending: bool,
    pub error_message: Option<String>,
    pub filtering_taxonomy: Vec<String>,
    pub leaf_category: Option<String>,
    pub response_preview: Option<String>,
    pub dirty: bool,
}
