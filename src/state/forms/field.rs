//! Form field value objects

/// Kind of input, mirrors the HTML input types the form uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
}

/// A single labeled input: its value plus the error attached by the last
/// validation pass
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    pub input_type: InputType,
    pub error: Option<String>,
}

impl FormField {
    /// Create a new empty field
    pub fn new(name: &str, label: &str, input_type: InputType) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            input_type,
            error: None,
        }
    }

    /// Whether the value should be masked when rendered
    pub fn is_masked(&self) -> bool {
        self.input_type == InputType::Password
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the value and any error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Get the display value for rendering, one `mask` per character for
    /// password inputs
    pub fn display_value(&self, mask: char) -> String {
        if self.is_masked() {
            std::iter::repeat(mask)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.as_text().to_string()
        }
    }
}
