use crate::models::request::FormSnapshot;

/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Server-side mirror of the form's `required` attributes.
///
/// The radio groups always carry a value and the dates are optional, so
/// only the text fields are checked. The free-text "other" override stays
/// advisory: it is never required, not even when the "other" option is the
/// active request type.
pub fn validate_snapshot(form: &FormSnapshot) -> Vec<String> {
    let mut errors: Vec<String> = Vec::new();

    let required = [
        (form.number.as_str(), "Number"),
        (form.from.as_str(), "From"),
        (form.to.as_str(), "To"),
        (form.subject.as_str(), "Subject"),
        (form.responsible.as_str(), "Responsible"),
        (form.received_by.as_str(), "Received by"),
        (form.by.as_str(), "By"),
        (form.executed_by.as_str(), "Executed by"),
    ];
    for (value, name) in required {
        errors.extend(validate_required(value, name, 200));
    }

    errors.extend(validate_required(&form.description, "Description", 4000));
    errors.extend(validate_optional(&form.other_request_type, "Other request type", 200));

    errors
}
