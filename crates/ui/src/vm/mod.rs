mod html;
mod play_vm;
mod time_fmt;

pub use html::sanitize_clue_html;
pub use play_vm::{FeedbackVm, PlayIntent, PlayVm, SummaryVm, start_failure_message};
pub use time_fmt::{format_aired_date, format_elapsed};
