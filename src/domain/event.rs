use serde::{Deserialize, Serialize};

/// Store key for the event name
pub const KEY_EVENT_NAME: &str = "eventName";
/// Store key for the event date
pub const KEY_EVENT_DATE: &str = "eventDate";

/// Defaults shown on first run, before the user has stored anything
pub const DEFAULT_EVENT_NAME: &str = "Midsummer Eve";
pub const DEFAULT_EVENT_DATE: &str = "2025-06-21";

/// The single event being counted down to.
///
/// Both fields are raw user-entered strings. The date is ISO
/// "YYYY-MM-DD" by convention but is never validated here - an
/// unparsable date simply produces a zero countdown downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub date: String,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            name: DEFAULT_EVENT_NAME.to_string(),
            date: DEFAULT_EVENT_DATE.to_string(),
        }
    }
}
