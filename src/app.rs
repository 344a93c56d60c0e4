//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, Form, FormButton, FormState, HitTarget, UserCreateForm, View};
use crate::submit::{LogSubmitter, UserSubmitter};
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// A running submission and the form instance that started it
struct PendingSubmit {
    form_id: Uuid,
    handle: JoinHandle<Result<()>>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded user configuration
    pub config: TuiConfig,
    /// Consumer of validated create-user records
    submitter: Arc<dyn UserSubmitter>,
    /// Submissions still running, oldest first
    pending: Vec<PendingSubmit>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App that logs submissions
    pub fn new(config: TuiConfig) -> Self {
        let submitter = Arc::new(LogSubmitter::new(config.submit_delay()));
        tracing::debug!(
            delay_ms = submitter.delay().as_millis() as u64,
            "submissions are logged only"
        );
        Self::with_submitter(config, submitter)
    }

    /// Create a new App handing submissions to `submitter`
    pub fn with_submitter(config: TuiConfig, submitter: Arc<dyn UserSubmitter>) -> Self {
        Self {
            state: AppState::new(),
            config,
            submitter,
            pending: Vec::new(),
            quit: false,
            status_message: None,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::with_submitter(TuiConfig::default(), Arc::new(LogSubmitter::default()))
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submission is running, so the event loop should poll faster
    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Dashboard | View::Users => self.handle_navigation_key(key),
            View::UserCreate => self.handle_user_create_key(key),
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        if view == self.state.current_view {
            return;
        }
        tracing::debug!(from = ?self.state.current_view, to = ?view, "navigate");
        self.state.view_history.push(self.state.current_view);
        self.enter(view);
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        // Skip form views in history to go back to the last non-form view
        while let Some(view) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            self.enter(view);
            return;
        }
    }

    /// Switch views; a form lives exactly as long as its view
    fn enter(&mut self, view: View) {
        self.state.current_view = view;
        self.state.form = match view {
            View::UserCreate => FormState::UserCreate(UserCreateForm::new()),
            View::Dashboard | View::Users => FormState::None,
        };
    }

    /// Handle keys in views without a form
    fn handle_navigation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('1') => self.navigate(View::Dashboard),
            KeyCode::Char('2') => self.navigate(View::Users),
            KeyCode::Char('n') if self.state.current_view == View::Users => {
                self.navigate(View::UserCreate)
            }
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    /// Handle keys in User Create view
    fn handle_user_create_key(&mut self, key: KeyEvent) {
        let Some(form) = self.state.user_form() else {
            return;
        };
        let on_buttons = form.is_buttons_row_active();
        let selected_button = form.selected_button;

        match key.code {
            KeyCode::Char('s') if crate::platform::is_save_modifier(key.modifiers) => {
                self.submit_form()
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Left | KeyCode::Right if on_buttons => {
                if let Some(form) = self.state.user_form_mut() {
                    form.selected_button.toggle();
                }
            }
            KeyCode::Enter if on_buttons && selected_button == FormButton::Cancel => {
                self.cancel_form()
            }
            // Enter in an input submits, like a browser form
            KeyCode::Enter => self.submit_form(),
            KeyCode::Esc => self.cancel_form(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    /// Validate the form and, when it passes, start the submit handler.
    ///
    /// Ignored while this form's previous submission is still running.
    pub fn submit_form(&mut self) {
        let Some(form) = self.state.user_form_mut() else {
            return;
        };
        if form.is_submitting {
            tracing::debug!("submission already in flight, ignoring");
            return;
        }

        match form.check() {
            Ok(values) => {
                form.is_submitting = true;
                let submitter = Arc::clone(&self.submitter);
                self.pending.push(PendingSubmit {
                    form_id: form.id,
                    handle: tokio::spawn(async move { submitter.create_user(values).await }),
                });
            }
            Err(errors) => {
                let failed: Vec<&str> = errors.iter().map(|(field, _)| field.name()).collect();
                tracing::debug!(
                    failed_fields = errors.len(),
                    ?failed,
                    "create user form rejected"
                );
            }
        }
    }

    /// Leave the form for the user listing, discarding its values
    pub fn cancel_form(&mut self) {
        self.navigate(View::Users);
    }

    /// Apply the results of submissions whose tasks have finished
    pub async fn poll_submission(&mut self) {
        if !self.pending.iter().any(|p| p.handle.is_finished()) {
            return;
        }
        let (done, running): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|p| p.handle.is_finished());
        self.pending = running;
        for submission in done {
            self.apply_submission(submission).await;
        }
    }

    /// Wait for every running submission and apply its result
    pub async fn finish_submission(&mut self) {
        for submission in std::mem::take(&mut self.pending) {
            self.apply_submission(submission).await;
        }
    }

    async fn apply_submission(&mut self, submission: PendingSubmit) {
        let failure = match submission.handle.await {
            Ok(Ok(())) => None,
            Ok(Err(err)) => Some(format!("Failed to create user: {err}")),
            Err(err) => Some(format!("Submit task failed: {err}")),
        };

        // Only the form that submitted is touched; it may have been discarded
        if let Some(form) = self
            .state
            .user_form_mut()
            .filter(|form| form.id == submission.form_id)
        {
            if failure.is_none() {
                form.reset();
            } else {
                form.is_submitting = false;
            }
        }

        match failure {
            None => self.status_message = Some("User created".to_string()),
            Some(message) => {
                tracing::warn!(
                    %message,
                    form_id = %submission.form_id,
                    "create user submission failed"
                );
                self.push_error(message);
            }
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.state.has_errors() {
            return;
        }
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return;
        };

        match self.state.hit_test(mouse.column, mouse.row) {
            Some(HitTarget::Sidebar(idx)) => self.navigate(sidebar_view(idx)),
            Some(HitTarget::Field(idx)) => {
                if let Some(form) = self.state.user_form_mut() {
                    form.set_active_field(idx);
                }
            }
            Some(HitTarget::CancelButton) => self.cancel_form(),
            Some(HitTarget::SaveButton) => {
                if let Some(form) = self.state.user_form_mut() {
                    form.set_active_field(UserCreateForm::BUTTONS_ROW);
                    form.selected_button = FormButton::Save;
                }
                self.submit_form();
            }
            None => {}
        }
    }
}

/// View opened by a sidebar item
fn sidebar_view(idx: usize) -> View {
    match idx {
        0 => View::Dashboard,
        _ => View::Users,
    }
}
