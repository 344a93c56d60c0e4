//! Layout components (header, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header height (with borders: top + content + bottom)
pub const HEADER_HEIGHT: u16 = 3;
/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 20;

/// Application title shown in the header
const APP_TITLE: &str = "userdesk";

/// Regions of the page shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub main: Rect,
    pub status_bar: Rect,
}

/// Split the screen into header, sidebar, main content and status bar
pub fn create_layout(area: Rect) -> PageLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Body
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[1]);

    PageLayout {
        header: rows[0],
        sidebar: body[0],
        main: body[1],
        status_bar: rows[2],
    }
}

/// Draw the header bar: title on the left, breadcrumbs after it
pub fn draw_header(frame: &mut Frame, area: Rect, view: View) {
    let mut spans = vec![
        Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(".", Style::default().fg(Color::Magenta)),
        Span::raw("   "),
    ];

    let breadcrumbs = view.breadcrumbs();
    for (i, label) in breadcrumbs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" / ", Style::default().fg(Color::DarkGray)));
        }
        // Last segment is the current page
        let style = if i == breadcrumbs.len() - 1 {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        spans.push(Span::styled(*label, style));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    // View-specific hints
    let hints = get_view_hints(app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if app.state.is_submitting() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Saving…", Style::default().fg(Color::Yellow)));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Dashboard => "1:dashboard  2:users  q:quit".to_string(),
        View::Users => "n:new user  1:dashboard  2:users  q:quit".to_string(),
        View::UserCreate => format!(
            "Tab:next  Enter/{}:save  Esc:cancel  ^C:quit",
            crate::platform::SAVE_SHORTCUT
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_create_layout_regions() {
        let layout = create_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header, Rect::new(0, 0, 100, HEADER_HEIGHT));
        assert_eq!(layout.sidebar, Rect::new(0, 3, SIDEBAR_WIDTH, 26));
        assert_eq!(layout.main, Rect::new(SIDEBAR_WIDTH, 3, 80, 26));
        assert_eq!(layout.status_bar, Rect::new(0, 29, 100, 1));
    }

    #[test]
    fn test_form_hints_mention_save_and_cancel() {
        let hints = get_view_hints(View::UserCreate);
        assert!(hints.contains("save"));
        assert!(hints.contains("Esc:cancel"));
    }

    #[test]
    fn test_header_shows_breadcrumbs() {
        let mut terminal = Terminal::new(TestBackend::new(60, HEADER_HEIGHT)).unwrap();
        terminal
            .draw(|frame| draw_header(frame, frame.area(), View::UserCreate))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("userdesk"));
        assert!(text.contains("Users / Create user"));
    }
}
