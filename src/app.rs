use crate::domain::{
    compute_time_left, parse_target_date, ActiveField, Event, TimeLeft, UiMode, KEY_EVENT_DATE,
    KEY_EVENT_NAME,
};
use crate::notifications;
use crate::persistence::KvStore;
use anyhow::Result;
use chrono::{DateTime, Local};

/// Main application state
pub struct AppState {
    /// The canonical event value - every form keystroke mutates this
    pub event: Event,
    /// Current-time reference, refreshed once per tick
    pub now: DateTime<Local>,
    /// Parsed target instant, None while the date string is unparsable
    pub target: Option<DateTime<Local>>,
    /// Derived countdown, recomputed on every tick and date change
    pub time_left: TimeLeft,
    pub ui_mode: UiMode,
    pub active_field: ActiveField,
    pub needs_save: bool,
    /// Set once the arrival notification has fired, so it fires only once
    /// per target
    announced: bool,
    store: Box<dyn KvStore>,
}

impl AppState {
    /// Build the app state from a store, falling back to the default
    /// event for missing keys. Stored values are taken as-is, unvalidated.
    pub fn new(store: Box<dyn KvStore>) -> Self {
        let defaults = Event::default();
        let event = Event {
            name: store.get(KEY_EVENT_NAME).unwrap_or(defaults.name),
            date: store.get(KEY_EVENT_DATE).unwrap_or(defaults.date),
        };

        let mut app = Self {
            event,
            now: Local::now(),
            target: None,
            time_left: TimeLeft::ZERO,
            ui_mode: UiMode::Normal,
            active_field: ActiveField::Name,
            needs_save: false,
            announced: false,
            store,
        };
        app.recompute(false);
        app
    }

    /// One timer tick: refresh the current time and recompute
    pub fn tick(&mut self) {
        self.set_now(Local::now());
    }

    /// Inject the current time (tests use this instead of waiting on the
    /// wall clock)
    pub fn set_now(&mut self, now: DateTime<Local>) {
        self.now = now;
        self.recompute(true);
    }

    /// Recompute the derived countdown from (event.date, now).
    ///
    /// `announce` is true only for tick-driven recomputes: the arrival
    /// notification should fire when the clock runs out, not while the
    /// user is mid-edit on the date field.
    fn recompute(&mut self, announce: bool) {
        let had_time = !self.time_left.is_zero();

        self.target = parse_target_date(&self.event.date);
        self.time_left = compute_time_left(&self.event.date, self.now);

        if !self.time_left.is_zero() {
            self.announced = false;
        } else if announce && had_time && !self.announced {
            notifications::notify_event_arrived(&self.event.name);
            self.announced = true;
        }
    }

    /// Start editing the currently focused field
    pub fn start_editing(&mut self) {
        self.ui_mode = UiMode::Editing;
    }

    /// Leave editing mode
    pub fn stop_editing(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Move focus to the other form field
    pub fn toggle_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    /// Append a typed character to the focused field
    pub fn push_char(&mut self, c: char) {
        match self.active_field {
            ActiveField::Name => self.event.name.push(c),
            ActiveField::Date => self.event.date.push(c),
        }
        self.on_field_changed();
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        match self.active_field {
            ActiveField::Name => self.event.name.pop(),
            ActiveField::Date => self.event.date.pop(),
        };
        self.on_field_changed();
    }

    /// Clear the focused field entirely
    pub fn clear_field(&mut self) {
        match self.active_field {
            ActiveField::Name => self.event.name.clear(),
            ActiveField::Date => self.event.date.clear(),
        }
        self.on_field_changed();
    }

    /// Every raw edit republishes immediately: recompute (a date change
    /// takes effect on this keystroke, not the next tick) and schedule a
    /// store write
    fn on_field_changed(&mut self) {
        self.recompute(false);
        self.needs_save = true;
    }

    /// Write both event keys back to the store
    pub fn save(&mut self) -> Result<()> {
        self.store.set(KEY_EVENT_NAME, &self.event.name)?;
        self.store.set(KEY_EVENT_DATE, &self.event.date)?;
        self.needs_save = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use chrono::TimeZone;

    fn create_test_app() -> AppState {
        AppState::new(Box::new(MemoryStore::new()))
    }

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_new_app_uses_defaults_for_empty_store() {
        let app = create_test_app();
        assert_eq!(app.event.name, "Midsummer Eve");
        assert_eq!(app.event.date, "2025-06-21");
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(!app.needs_save);
    }

    #[test]
    fn test_new_app_loads_stored_event() {
        let mut store = MemoryStore::new();
        store.set(KEY_EVENT_NAME, "Launch day").unwrap();
        store.set(KEY_EVENT_DATE, "2031-04-01").unwrap();

        let app = AppState::new(Box::new(store));
        assert_eq!(app.event.name, "Launch day");
        assert_eq!(app.event.date, "2031-04-01");
        assert!(app.target.is_some());
    }

    #[test]
    fn test_tick_drains_one_second() {
        let mut store = MemoryStore::new();
        store.set(KEY_EVENT_DATE, "2030-01-02").unwrap();
        let mut app = AppState::new(Box::new(store));

        app.set_now(local(2030, 1, 1, 23, 59, 30));
        assert_eq!(app.time_left.total_seconds(), 30);

        app.set_now(local(2030, 1, 1, 23, 59, 31));
        assert_eq!(app.time_left.total_seconds(), 29);
    }

    #[test]
    fn test_reached_target_stays_zero() {
        let mut store = MemoryStore::new();
        store.set(KEY_EVENT_DATE, "2030-01-02").unwrap();
        let mut app = AppState::new(Box::new(store));

        app.set_now(local(2030, 1, 2, 0, 0, 0));
        assert!(app.time_left.is_zero());

        app.set_now(local(2030, 1, 2, 0, 0, 1));
        assert!(app.time_left.is_zero());
    }

    #[test]
    fn test_push_char_updates_name_and_flags_save() {
        let mut app = create_test_app();
        app.clear_field();
        app.push_char('H');
        app.push_char('i');

        assert_eq!(app.event.name, "Hi");
        assert!(app.needs_save);
    }

    #[test]
    fn test_date_edit_recomputes_immediately() {
        let mut app = create_test_app();
        app.set_now(local(2030, 1, 1, 0, 0, 0));
        app.toggle_field();
        assert_eq!(app.active_field, ActiveField::Date);

        app.clear_field();
        assert!(app.time_left.is_zero());
        assert!(app.target.is_none());

        for c in "2030-01-02".chars() {
            app.push_char(c);
        }
        assert!(app.target.is_some());
        assert_eq!(app.time_left.days, 1);
    }

    #[test]
    fn test_unparsable_date_is_silently_zero() {
        let mut app = create_test_app();
        app.toggle_field();
        app.clear_field();
        for c in "not-a-date".chars() {
            app.push_char(c);
        }

        assert!(app.target.is_none());
        assert!(app.time_left.is_zero());
    }

    #[test]
    fn test_backspace_on_empty_field() {
        let mut app = create_test_app();
        app.clear_field();
        app.backspace();
        assert_eq!(app.event.name, "");
    }

    #[test]
    fn test_save_round_trips_through_store() {
        let mut app = create_test_app();
        app.toggle_field();
        app.clear_field();
        for c in "2031-12-25".chars() {
            app.push_char(c);
        }
        app.save().unwrap();
        assert!(!app.needs_save);

        assert_eq!(
            app.store.get(KEY_EVENT_DATE),
            Some("2031-12-25".to_string())
        );
    }
}
