//! Form domain layer
//!
//! Type-safe form handling for the create-user view: field value objects,
//! the form state machine and the validation schema.

mod field;
mod form_state;
mod schema;

pub use field::{FormField, InputType};
pub use form_state::{Form, FormButton, FormState, UserCreateForm};
pub use schema::{
    validate, CreateUserFormData, FieldError, UserField, ValidationErrors, MIN_PASSWORD_LEN,
};
