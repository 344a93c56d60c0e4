//! Sidebar drawing functions

use super::SIDEBAR_ITEMS;
use crate::app::App;
use crate::state::HitTarget;
use crate::ui::components::{render_sidebar_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Draw the sidebar with boxed buttons stacked from the top
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &mut App) {
    let selected = app.state.current_view.sidebar_index();

    let mut constraints: Vec<Constraint> = SIDEBAR_ITEMS
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, label) in SIDEBAR_ITEMS.iter().enumerate() {
        render_sidebar_button(frame, chunks[idx], label, idx == selected);
        app.state
            .register_hit_area(chunks[idx], HitTarget::Sidebar(idx));
    }
}
