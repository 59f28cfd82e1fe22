//! StudyGate core: pure state machine, time gate and view-model helpers.
mod effect;
mod lookup;
mod msg;
mod state;
mod time_gate;
mod update;
mod view_model;

pub use effect::Effect;
pub use lookup::{LookupFailure, LookupOutcome, RequestId};
pub use msg::Msg;
pub use state::AppState;
pub use time_gate::{
    is_blocked, ClockTime, TimeParseError, TimeWindow, DEFAULT_WINDOW_END, DEFAULT_WINDOW_START,
};
pub use update::update;
pub use view_model::AppViewModel;
