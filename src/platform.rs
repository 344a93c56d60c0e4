//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier accepted alongside Ctrl for the save shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SAVE_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SAVE_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Save shortcut display for form help text
/// Ctrl+S works on all platforms
pub const SAVE_SHORTCUT: &str = "Ctrl+S";

/// Whether `modifiers` hold the save modifier (Ctrl, or Cmd on macOS)
pub fn is_save_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(SAVE_MODIFIER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_is_always_save_modifier() {
        assert!(is_save_modifier(KeyModifiers::CONTROL));
    }

    #[test]
    fn test_plain_key_is_not_save_modifier() {
        assert!(!is_save_modifier(KeyModifiers::NONE));
        assert!(!is_save_modifier(KeyModifiers::SHIFT));
    }
}
