//! UI module for rendering the TUI

mod components;
mod dashboard;
mod forms;
mod layout;
mod sidebar;
mod users;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    // Hit areas are rebuilt every frame
    app.state.clear_hit_areas();

    let page = layout::create_layout(frame.area());

    layout::draw_header(frame, page.header, app.state.current_view);
    sidebar::draw_sidebar(frame, page.sidebar, app);

    match app.state.current_view {
        View::Dashboard => dashboard::draw(frame, page.main),
        View::Users => users::draw_list(frame, page.main),
        View::UserCreate => forms::draw_user_create(frame, page.main, app),
    }

    layout::draw_status_bar(frame, page.status_bar, app);

    // Error dialog is modal and drawn last
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}
