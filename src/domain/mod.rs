pub mod countdown;
pub mod enums;
pub mod event;

pub use countdown::{compute_time_left, parse_target_date, TimeLeft};
pub use enums::{ActiveField, UiMode};
pub use event::{Event, KEY_EVENT_DATE, KEY_EVENT_NAME};
