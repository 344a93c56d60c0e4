//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one labeled input: bordered box plus the error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a labeled input with its error message underneath.
///
/// Returns the area of the input box, for click handling.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    mask: char,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Error message
        ])
        .split(area);

    let border_style = if field.has_error() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value(mask);
    let cursor = if is_active { "▌" } else { "" };
    // Keep the end of the value, and the cursor, inside the borders
    let inner_width = chunks[0].width.saturating_sub(2) as usize;
    let visible = visible_tail(
        &display_value,
        inner_width.saturating_sub(cursor.chars().count()),
    );

    let content = Paragraph::new(Line::from(vec![
        Span::styled(visible, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), chunks[0]);

    if let Some(error) = &field.error {
        let message = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(message, chunks[1]);
    }

    chunks[0]
}

/// Last `width` characters of `text`
fn visible_tail(text: &str, width: usize) -> &str {
    let skip = text.chars().count().saturating_sub(width);
    match text.char_indices().nth(skip) {
        Some((start, _)) => &text[start..],
        None => "",
    }
}

/// Draw the key hints line under a form
pub fn draw_help_text(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", key),
        Span::raw(": next field  "),
        Span::styled("Enter", key),
        Span::raw(" / "),
        Span::styled(crate::platform::SAVE_SHORTCUT, key),
        Span::raw(": save  "),
        Span::styled("Esc", key),
        Span::raw(": cancel"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InputType;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(field: &FormField, is_active: bool) -> (String, Rect) {
        let backend = TestBackend::new(30, FIELD_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input_area = Rect::default();
        terminal
            .draw(|frame| {
                input_area = draw_field(frame, frame.area(), field, is_active, '*');
            })
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        (text, input_area)
    }

    #[test]
    fn test_renders_label_and_value() {
        let mut field = FormField::new("name", "Full name", InputType::Text);
        field.value = "Ana".to_string();
        let (text, _) = render(&field, false);
        assert!(text.contains("Full name"));
        assert!(text.contains("Ana"));
    }

    #[test]
    fn test_password_value_is_masked() {
        let mut field = FormField::new("password", "Password", InputType::Password);
        field.value = "secret".to_string();
        let (text, _) = render(&field, false);
        assert!(text.contains("******"));
        assert!(!text.contains("secret"));
    }

    #[test]
    fn test_error_is_rendered_below_input() {
        let mut field = FormField::new("email", "E-mail", InputType::Email);
        field.set_error("Invalid e-mail");
        let (text, _) = render(&field, false);
        // Last row of the buffer is the error line
        let last_row: String = text.chars().skip(30 * 3).collect();
        assert!(last_row.contains("Invalid e-mail"));
    }

    #[test]
    fn test_returns_input_box_area() {
        let field = FormField::new("name", "Full name", InputType::Text);
        let (_, area) = render(&field, true);
        assert_eq!(area, Rect::new(0, 0, 30, 3));
    }

    #[test]
    fn test_visible_tail_keeps_end_of_text() {
        assert_eq!(visible_tail("abcdef", 3), "def");
        assert_eq!(visible_tail("abc", 10), "abc");
        assert_eq!(visible_tail("abc", 0), "");
        assert_eq!(visible_tail("séc", 2), "éc");
    }

    #[test]
    fn test_long_value_scrolls_to_keep_cursor_visible() {
        let mut field = FormField::new("name", "Full name", InputType::Text);
        field.value = "abcdefghijklmnopqrstuvwxyz0123456789ABCD".to_string();
        let (text, _) = render(&field, true);
        // Inner width is 28: 27 characters of value plus the cursor
        let value_row: String = text.chars().skip(30).take(30).collect();
        assert_eq!(value_row, "│nopqrstuvwxyz0123456789ABCD▌│");
    }
}
