//! Synchronous form validation.
//!
//! The backend owns all real validation; forms only refuse to submit empty
//! required fields. A validator returns the inline message to render next to
//! the field, or an empty string when the field passes.

/// Required-field check. Whitespace-only input counts as empty.
pub fn required(label: &str, value: &str) -> String {
    if value.trim().is_empty() {
        format!("{} is required", label)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::required;

    #[test]
    fn empty_and_whitespace_fail() {
        assert_eq!(required("Role group", ""), "Role group is required");
        assert_eq!(required("Role name", "   "), "Role name is required");
        assert_eq!(required("Status", "\t\n"), "Status is required");
    }

    #[test]
    fn non_empty_passes_with_empty_message() {
        assert_eq!(required("Role group", "Clinical"), "");
        assert_eq!(required("Role name", "Nurse"), "");
        assert_eq!(required("Status", "active"), "");
    }
}
