//! Form state management and form structs

use super::field::{FormField, InputType};
use super::schema::{CreateUserFormData, UserField, ValidationErrors};
use uuid::Uuid;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Form attached to the current view, if any
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    UserCreate(UserCreateForm),
}

impl FormState {
    pub fn next_field(&mut self) {
        match self {
            FormState::None => {}
            FormState::UserCreate(f) => f.next_field(),
        }
    }

    pub fn prev_field(&mut self) {
        match self {
            FormState::None => {}
            FormState::UserCreate(f) => f.prev_field(),
        }
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self {
            FormState::None => None,
            FormState::UserCreate(f) => f.get_active_field_mut(),
        }
    }

    pub fn user_create(&self) -> Option<&UserCreateForm> {
        match self {
            FormState::UserCreate(f) => Some(f),
            FormState::None => None,
        }
    }

    pub fn user_create_mut(&mut self) -> Option<&mut UserCreateForm> {
        match self {
            FormState::UserCreate(f) => Some(f),
            FormState::None => None,
        }
    }
}

/// Buttons on the create-user action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    Cancel,
    #[default]
    Save,
}

impl FormButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Cancel => Self::Save,
            Self::Save => Self::Cancel,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cancel => "Cancel",
            Self::Save => "Save",
        }
    }
}

// User Create Form
#[derive(Debug, Clone)]
pub struct UserCreateForm {
    /// Identifies this form instance; submissions report back against it
    pub id: Uuid,
    pub name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub password_confirmation: FormField,
    /// 0-3 are the inputs, 4 is the action row
    pub active_field_index: usize,
    pub selected_button: FormButton,
    /// Set while the submit handler runs
    pub is_submitting: bool,
}

impl UserCreateForm {
    /// Index of the action row in the focus ring
    pub const BUTTONS_ROW: usize = 4;

    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Self::field(UserField::Name, InputType::Text),
            email: Self::field(UserField::Email, InputType::Email),
            password: Self::field(UserField::Password, InputType::Password),
            password_confirmation: Self::field(
                UserField::PasswordConfirmation,
                InputType::Password,
            ),
            active_field_index: 0,
            selected_button: FormButton::default(),
            is_submitting: false,
        }
    }

    fn field(field: UserField, input_type: InputType) -> FormField {
        FormField::new(field.name(), field.label(), input_type)
    }

    pub fn field_for(&self, field: UserField) -> &FormField {
        match field {
            UserField::Name => &self.name,
            UserField::Email => &self.email,
            UserField::Password => &self.password,
            UserField::PasswordConfirmation => &self.password_confirmation,
        }
    }

    pub fn field_for_mut(&mut self, field: UserField) -> &mut FormField {
        match field {
            UserField::Name => &mut self.name,
            UserField::Email => &mut self.email,
            UserField::Password => &mut self.password,
            UserField::PasswordConfirmation => &mut self.password_confirmation,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTONS_ROW
    }

    /// Snapshot of the current values
    pub fn values(&self) -> CreateUserFormData {
        CreateUserFormData {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            password: self.password.value.clone(),
            password_confirmation: self.password_confirmation.value.clone(),
        }
    }

    /// Run the schema over the current values and attach the outcome to the
    /// fields. Fields that pass lose any previous error.
    pub fn check(&mut self) -> Result<CreateUserFormData, ValidationErrors> {
        let values = self.values();
        let result = values.validate();
        let errors = result.as_ref().err().cloned().unwrap_or_default();
        self.apply_errors(&errors);
        result.map(|()| values)
    }

    pub fn apply_errors(&mut self, errors: &ValidationErrors) {
        for field in UserField::ALL {
            let slot = self.field_for_mut(field);
            match errors.get(field) {
                Some(err) => slot.set_error(err.to_string()),
                None => slot.clear_error(),
            }
        }
    }

    /// Empty every field and return focus to the first one
    pub fn reset(&mut self) {
        for field in UserField::ALL {
            self.field_for_mut(field).clear();
        }
        self.active_field_index = 0;
        self.selected_button = FormButton::default();
        self.is_submitting = false;
    }
}

impl Default for UserCreateForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for UserCreateForm {
    fn field_count(&self) -> usize {
        5 // four inputs, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match UserField::from_index(self.active_field_index) {
            Some(field) => Some(self.field_for_mut(field)),
            None => None,
        }
    }
}
