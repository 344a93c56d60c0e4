//! Create-user form rendering

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FormButton, HitTarget, UserField};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Horizontal gap between inputs sharing a row
const COLUMN_SPACING: u16 = 2;
/// Width of each action button
const ACTION_BUTTON_WIDTH: u16 = 14;

/// Number of inputs that fit side by side in `width` (auto-fit grid, at most
/// two per row since the form pairs its inputs)
pub fn grid_columns(width: u16, min_child_width: u16) -> usize {
    let min_child_width = min_child_width.max(1);
    let fit = width.saturating_add(COLUMN_SPACING)
        / min_child_width.saturating_add(COLUMN_SPACING);
    (fit as usize).clamp(1, 2)
}

/// Draw the create-user form
pub fn draw_create(frame: &mut Frame, area: Rect, app: &mut App) {
    let mask = app.config.mask_char();
    let min_field_width = app.config.min_field_width();
    let Some(form) = app.state.user_form() else {
        return;
    };

    let block = Block::default()
        .title(" Create user ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area).inner(Margin::new(1, 0));
    frame.render_widget(block, area);

    let columns = grid_columns(inner.width, min_field_width);
    // Two pairs of inputs, one blank row between grid rows
    let grid_rows = if columns == 2 { 2 } else { 4 };
    let grid_height = grid_rows * FIELD_HEIGHT + (grid_rows - 1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Heading
            Constraint::Length(1),             // Divider
            Constraint::Length(1),             // Spacing
            Constraint::Length(grid_height),   // Inputs
            Constraint::Length(1),             // Spacing
            Constraint::Length(BUTTON_HEIGHT), // Actions
            Constraint::Min(0),                // Remaining space
            Constraint::Length(1),             // Help text
        ])
        .split(inner);

    let heading = Paragraph::new(Span::styled(
        "Create user",
        Style::default().add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, chunks[0]);

    let divider = Paragraph::new("─".repeat(chunks[1].width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(divider, chunks[1]);

    let mut hits = Vec::new();

    for (field, cell) in UserField::ALL
        .into_iter()
        .zip(field_cells(chunks[3], columns))
    {
        let is_active = form.active_field_index == field.index();
        let input_area = draw_field(frame, cell, form.field_for(field), is_active, mask);
        hits.push((input_area, HitTarget::Field(field.index())));
    }

    // Actions, right aligned
    let [cancel_area, save_area] = Layout::horizontal([
        Constraint::Length(ACTION_BUTTON_WIDTH),
        Constraint::Length(ACTION_BUTTON_WIDTH),
    ])
    .flex(Flex::End)
    .spacing(COLUMN_SPACING)
    .areas(chunks[5]);

    let on_buttons = form.is_buttons_row_active();
    render_action_button(
        frame,
        cancel_area,
        FormButton::Cancel.label(),
        on_buttons && form.selected_button == FormButton::Cancel,
        true,
        Color::Gray,
    );
    let save_label = if form.is_submitting {
        "Saving…"
    } else {
        FormButton::Save.label()
    };
    render_action_button(
        frame,
        save_area,
        save_label,
        on_buttons && form.selected_button == FormButton::Save,
        !form.is_submitting,
        Color::Magenta,
    );
    hits.push((cancel_area, HitTarget::CancelButton));
    hits.push((save_area, HitTarget::SaveButton));

    draw_help_text(frame, chunks[7]);

    for (rect, target) in hits {
        app.state.register_hit_area(rect, target);
    }
}

/// Split the inputs area into one cell per field, in field order
fn field_cells(area: Rect, columns: usize) -> Vec<Rect> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if columns == 2 {
            vec![
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(FIELD_HEIGHT),
            ]
        } else {
            vec![
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(FIELD_HEIGHT),
            ]
        })
        .split(area);

    if columns == 2 {
        [rows[0], rows[2]]
            .into_iter()
            .flat_map(|row| {
                Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)])
                    .spacing(COLUMN_SPACING)
                    .split(row)
                    .to_vec()
            })
            .collect()
    } else {
        rows.iter().step_by(2).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns_wide_area_fits_two() {
        assert_eq!(grid_columns(80, 30), 2);
        assert_eq!(grid_columns(62, 30), 2);
    }

    #[test]
    fn test_grid_columns_narrow_area_stacks() {
        assert_eq!(grid_columns(61, 30), 1);
        assert_eq!(grid_columns(10, 30), 1);
        assert_eq!(grid_columns(0, 30), 1);
    }

    #[test]
    fn test_grid_columns_caps_at_two() {
        assert_eq!(grid_columns(200, 10), 2);
    }

    #[test]
    fn test_field_cells_two_columns() {
        let cells = field_cells(Rect::new(0, 0, 62, 2 * FIELD_HEIGHT + 1), 2);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0].y, cells[1].y);
        assert!(cells[1].x > cells[0].x);
        assert_eq!(cells[2].y, FIELD_HEIGHT + 1);
        assert_eq!(cells[2].y, cells[3].y);
    }

    #[test]
    fn test_field_cells_single_column() {
        let cells = field_cells(Rect::new(0, 0, 40, 4 * FIELD_HEIGHT + 3), 1);
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|c| c.x == 0 && c.width == 40));
        assert_eq!(cells[3].y, 3 * (FIELD_HEIGHT + 1));
    }
}
