//! Create-user form values and their validation schema
//!
//! Validation is a pure function over the whole record. Each field reports at
//! most one error: the first rule it fails, in declaration order.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use validator::ValidateEmail;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// The four fields of the create-user form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserField {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

impl UserField {
    /// All fields in form order
    pub const ALL: [UserField; 4] = [
        UserField::Name,
        UserField::Email,
        UserField::Password,
        UserField::PasswordConfirmation,
    ];

    /// Field name as submitted
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordConfirmation => "password_confirmation",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Email => "E-mail",
            Self::Password => "Password",
            Self::PasswordConfirmation => "Password confirmation",
        }
    }

    /// Position in the form's focus order
    pub fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Password => 2,
            Self::PasswordConfirmation => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} is required")]
    Required { field: UserField },
    #[error("Invalid e-mail")]
    InvalidFormat,
    #[error("Must be at least {min} characters")]
    TooShort { min: usize },
    #[error("Passwords must match")]
    Mismatch,
}

/// Errors collected from one validation pass, keyed by field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<UserField, FieldError>);

impl ValidationErrors {
    pub fn get(&self, field: UserField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (UserField, &FieldError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }

    fn insert(&mut self, field: UserField, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }
}

/// Values submitted by the create-user form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserFormData {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl CreateUserFormData {
    /// Value of a single field
    pub fn get(&self, field: UserField) -> &str {
        match field {
            UserField::Name => &self.name,
            UserField::Email => &self.email,
            UserField::Password => &self.password,
            UserField::PasswordConfirmation => &self.password_confirmation,
        }
    }

    /// Check the record against the schema
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate(self)
    }
}

/// Validate every field of `values`, reporting all failures at once
pub fn validate(values: &CreateUserFormData) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for field in [UserField::Name, UserField::Email, UserField::Password] {
        if values.get(field).is_empty() {
            errors.insert(field, FieldError::Required { field });
        }
    }

    if !values.email.is_empty() && !values.email.validate_email() {
        errors.insert(UserField::Email, FieldError::InvalidFormat);
    }

    if !values.password.is_empty() && values.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            UserField::Password,
            FieldError::TooShort {
                min: MIN_PASSWORD_LEN,
            },
        );
    }

    // Empty confirmation against empty password is a match.
    if values.password_confirmation != values.password {
        errors.insert(UserField::PasswordConfirmation, FieldError::Mismatch);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_values() -> CreateUserFormData {
        CreateUserFormData {
            name: "Ana".to_string(),
            email: "ana@ex.com".to_string(),
            password: "abcdef".to_string(),
            password_confirmation: "abcdef".to_string(),
        }
    }

    mod name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_name_is_required() {
            let values = CreateUserFormData {
                name: String::new(),
                ..valid_values()
            };
            let errors = validate(&values).unwrap_err();
            assert_eq!(
                errors.get(UserField::Name),
                Some(&FieldError::Required {
                    field: UserField::Name
                })
            );
            assert_eq!(errors.len(), 1);
        }

        #[test]
        fn test_whitespace_name_is_accepted() {
            let values = CreateUserFormData {
                name: "   ".to_string(),
                ..valid_values()
            };
            assert!(validate(&values).is_ok());
        }
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_email_is_required_not_invalid() {
            let values = CreateUserFormData {
                email: String::new(),
                ..valid_values()
            };
            let errors = validate(&values).unwrap_err();
            assert_eq!(
                errors.get(UserField::Email),
                Some(&FieldError::Required {
                    field: UserField::Email
                })
            );
        }

        #[test]
        fn test_malformed_emails_are_invalid() {
            for email in ["bad", "ana@", "@ex.com", "ana ex.com", "ana@@ex.com"] {
                let values = CreateUserFormData {
                    email: email.to_string(),
                    ..valid_values()
                };
                let errors = validate(&values).unwrap_err();
                assert_eq!(
                    errors.get(UserField::Email),
                    Some(&FieldError::InvalidFormat),
                    "expected {email:?} to be rejected"
                );
            }
        }

        #[test]
        fn test_well_formed_emails_pass() {
            for email in ["ana@ex.com", "first.last+tag@mail.example.org"] {
                let values = CreateUserFormData {
                    email: email.to_string(),
                    ..valid_values()
                };
                assert!(validate(&values).is_ok(), "expected {email:?} to pass");
            }
        }
    }

    mod password {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_password_is_required() {
            let values = CreateUserFormData {
                password: String::new(),
                password_confirmation: String::new(),
                ..valid_values()
            };
            let errors = validate(&values).unwrap_err();
            assert_eq!(
                errors.get(UserField::Password),
                Some(&FieldError::Required {
                    field: UserField::Password
                })
            );
        }

        #[test]
        fn test_short_password_is_too_short() {
            let values = CreateUserFormData {
                password: "abcde".to_string(),
                password_confirmation: "abcde".to_string(),
                ..valid_values()
            };
            let errors = validate(&values).unwrap_err();
            assert_eq!(
                errors.get(UserField::Password),
                Some(&FieldError::TooShort { min: 6 })
            );
            assert!(errors.get(UserField::PasswordConfirmation).is_none());
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            // Six characters, twelve bytes
            let values = CreateUserFormData {
                password: "ááááá".to_string(),
                password_confirmation: "ááááá".to_string(),
                ..valid_values()
            };
            assert!(validate(&values).is_err());

            let values = CreateUserFormData {
                password: "áááááá".to_string(),
                password_confirmation: "áááááá".to_string(),
                ..valid_values()
            };
            assert!(validate(&values).is_ok());
        }
    }

    mod confirmation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_mismatch_is_reported() {
            let values = CreateUserFormData {
                password_confirmation: "abcdeg".to_string(),
                ..valid_values()
            };
            let errors = validate(&values).unwrap_err();
            assert_eq!(
                errors.get(UserField::PasswordConfirmation),
                Some(&FieldError::Mismatch)
            );
            assert_eq!(errors.len(), 1);
        }

        #[test]
        fn test_empty_confirmation_against_password_is_mismatch() {
            let values = CreateUserFormData {
                password_confirmation: String::new(),
                ..valid_values()
            };
            let errors = validate(&values).unwrap_err();
            assert_eq!(
                errors.get(UserField::PasswordConfirmation),
                Some(&FieldError::Mismatch)
            );
        }

        #[test]
        fn test_empty_pair_matches_but_password_still_blocks() {
            let values = CreateUserFormData {
                password: String::new(),
                password_confirmation: String::new(),
                ..valid_values()
            };
            let errors = validate(&values).unwrap_err();
            assert!(errors.get(UserField::PasswordConfirmation).is_none());
            assert!(errors.get(UserField::Password).is_some());
        }
    }

    mod scenarios {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_record_passes() {
            assert_eq!(valid_values().validate(), Ok(()));
        }

        #[test]
        fn test_all_four_errors_at_once() {
            let values = CreateUserFormData {
                name: String::new(),
                email: "bad".to_string(),
                password: "123".to_string(),
                password_confirmation: "124".to_string(),
            };
            let errors = validate(&values).unwrap_err();
            let collected: Vec<_> = errors.iter().map(|(f, e)| (f, e.clone())).collect();
            assert_eq!(
                collected,
                vec![
                    (
                        UserField::Name,
                        FieldError::Required {
                            field: UserField::Name
                        }
                    ),
                    (UserField::Email, FieldError::InvalidFormat),
                    (UserField::Password, FieldError::TooShort { min: 6 }),
                    (UserField::PasswordConfirmation, FieldError::Mismatch),
                ]
            );
        }
    }

    mod messages {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_error_messages() {
            assert_eq!(
                FieldError::Required {
                    field: UserField::Name
                }
                .to_string(),
                "Full name is required"
            );
            assert_eq!(FieldError::InvalidFormat.to_string(), "Invalid e-mail");
            assert_eq!(
                FieldError::TooShort { min: 6 }.to_string(),
                "Must be at least 6 characters"
            );
            assert_eq!(FieldError::Mismatch.to_string(), "Passwords must match");
        }

        #[test]
        fn test_field_names_and_indices() {
            for (i, field) in UserField::ALL.iter().enumerate() {
                assert_eq!(field.index(), i);
                assert_eq!(UserField::from_index(i), Some(*field));
            }
            assert_eq!(UserField::PasswordConfirmation.name(), "password_confirmation");
            assert!(UserField::from_index(4).is_none());
        }
    }
}
