pub mod countdown_pane;
pub mod form_pane;
pub mod keybindings;
pub mod layout;
pub mod styles;

use crate::app::AppState;
use countdown_pane::render_countdown_pane;
use form_pane::render_form_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_countdown_pane(f, app, layout.countdown_area);
    render_form_pane(f, app, layout.form_area);
}
