//! Application state definitions

use super::forms::{FormState, UserCreateForm};
use ratatui::layout::{Position, Rect};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    Dashboard,
    Users,
    #[default]
    UserCreate,
}

impl View {
    /// Views that own a form and must not be returned to through history
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::UserCreate)
    }

    /// Breadcrumb segments shown in the header
    pub fn breadcrumbs(&self) -> &'static [&'static str] {
        match self {
            View::Dashboard => &["Dashboard"],
            View::Users => &["Users"],
            View::UserCreate => &["Users", "Create user"],
        }
    }

    /// Index of the sidebar item this view belongs to
    pub fn sidebar_index(&self) -> usize {
        match self {
            View::Dashboard => 0,
            View::Users | View::UserCreate => 1,
        }
    }
}

/// Something the mouse can click, recorded while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Sidebar(usize),
    Field(usize),
    CancelButton,
    SaveButton,
}

/// Screen region of a clickable element from the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    pub area: Rect,
    pub target: HitTarget,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Form attached to the current view
    pub form: FormState,

    // Modal error dialog queue
    errors: VecDeque<String>,

    // Clickable regions from the last draw
    pub hit_areas: Vec<HitArea>,
}

impl AppState {
    /// State opened on the create-user page with a fresh form
    pub fn new() -> Self {
        Self {
            form: FormState::UserCreate(UserCreateForm::new()),
            ..Self::default()
        }
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Forget the hit areas of the previous frame
    pub fn clear_hit_areas(&mut self) {
        self.hit_areas.clear();
    }

    pub fn register_hit_area(&mut self, area: Rect, target: HitTarget) {
        self.hit_areas.push(HitArea { area, target });
    }

    /// Find what lies under a mouse position; later registrations win
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let pos = Position::new(column, row);
        self.hit_areas
            .iter()
            .rev()
            .find(|hit| hit.area.contains(pos))
            .map(|hit| hit.target)
    }

    /// The create-user form, when that view is open
    pub fn user_form(&self) -> Option<&UserCreateForm> {
        self.form.user_create()
    }

    pub fn user_form_mut(&mut self) -> Option<&mut UserCreateForm> {
        self.form.user_create_mut()
    }

    /// Whether a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.user_form().is_some_and(|f| f.is_submitting)
    }
}
