use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub countdown_area: Rect,
    pub form_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Middle: countdown display (fills remaining space)
/// - Bottom: event form (fixed height)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(7),    // Countdown display
            Constraint::Length(8), // Event form
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        countdown_area: chunks[1],
        form_area: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert!(layout.countdown_area.height >= 7);
        assert_eq!(layout.form_area.height, 8);

        // Stacked top to bottom without overlap
        assert!(layout.countdown_area.y >= layout.keybindings_area.bottom());
        assert!(layout.form_area.y >= layout.countdown_area.bottom());
    }
}
