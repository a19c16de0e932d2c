//! Field validators for employee and project forms.
//!
//! Each validator returns `None` when the value is acceptable and the message to
//! show next to the field otherwise.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zÁÉÍÓÚÜÑáéíóúüñ ]+$").expect("name pattern"));
static NIF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}[A-HJ-NP-TV-Z]$").expect("nif pattern"));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("phone pattern"));
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("date pattern"));

const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

pub fn validate_not_blank(value: &str, field_name: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{field_name} cannot be empty."))
    } else {
        None
    }
}

pub fn validate_name(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Name is required.".into());
    }
    if !NAME_RE.is_match(value) {
        return Some("Only letters and spaces.".into());
    }
    let len = value.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        return Some(format!(
            "Must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters."
        ));
    }
    None
}

pub fn validate_nif(value: &str) -> Option<String> {
    (!NIF_RE.is_match(value)).then(|| "Invalid NIF.".to_string())
}

pub fn validate_phone(value: &str) -> Option<String> {
    (!PHONE_RE.is_match(value)).then(|| "Invalid phone number.".to_string())
}

pub fn validate_email(value: &str) -> Option<String> {
    (!EMAIL_RE.is_match(value)).then(|| "Invalid email.".to_string())
}

/// `YYYY-MM-DD` with a coarse range check. Empty input is accepted; pair with
/// [`validate_not_blank`] for required dates.
pub fn validate_date(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let Some(caps) = DATE_RE.captures(value) else {
        return Some("Format must be YYYY-MM-DD".into());
    };
    let part = |i: usize| caps[i].parse::<u32>().unwrap_or(0);
    let (year, month, day) = (part(1), part(2), part(3));
    if !(1900..=2100).contains(&year) || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Some("Invalid date".into());
    }
    None
}

/// Run the employee form rules against a JSON payload before it is posted.
pub fn validate_employee_payload(payload: &Value) -> Vec<FieldError> {
    let text = |field: &str| payload.get(field).and_then(Value::as_str).unwrap_or("");
    let mut errors = Vec::new();
    let mut push = |field: &'static str, message: Option<String>| {
        if let Some(message) = message {
            errors.push(FieldError { field, message });
        }
    };

    push("nif", validate_nif(text("nif")));
    for field in ["firstName", "lastName1", "lastName2"] {
        push(field, validate_name(text(field)));
    }
    for field in ["phone1", "phone2"] {
        push(field, validate_phone(text(field)));
    }
    push("email", validate_email(text("email")));
    push("birthDate", validate_date(text("birthDate")));
    push(
        "startDate",
        validate_not_blank(text("startDate"), "Start date").or_else(|| validate_date(text("startDate"))),
    );

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn names_allow_accented_letters_and_spaces() {
        assert_eq!(validate_name("José María"), None);
        assert_eq!(validate_name("Íñigo"), None);
        assert!(validate_name("R2D2").is_some());
        assert!(validate_name("Al").is_some());
        assert!(validate_name("").is_some());
        assert!(validate_name(&"a".repeat(41)).is_some());
    }

    #[test]
    fn nif_requires_eight_digits_and_a_control_letter() {
        assert_eq!(validate_nif("12345678Z"), None);
        assert!(validate_nif("12345678I").is_some());
        assert!(validate_nif("1234567Z").is_some());
    }

    #[test]
    fn phone_and_email_patterns() {
        assert_eq!(validate_phone("+34600111222"), None);
        assert!(validate_phone("600-111").is_some());
        assert_eq!(validate_email("ana@example.com"), None);
        assert!(validate_email("ana@example").is_some());
    }

    #[test]
    fn dates_are_range_checked() {
        assert_eq!(validate_date(""), None);
        assert_eq!(validate_date("2024-02-29"), None);
        assert_eq!(validate_date("2024/02/29"), Some("Format must be YYYY-MM-DD".into()));
        assert_eq!(validate_date("1899-01-01"), Some("Invalid date".into()));
        assert_eq!(validate_date("2024-13-01"), Some("Invalid date".into()));
    }

    #[test]
    fn employee_payload_reports_each_bad_field() {
        let payload = json!({
            "nif": "12345678Z",
            "firstName": "Ana",
            "lastName1": "García",
            "lastName2": "López",
            "phone1": "600111222",
            "phone2": "bad",
            "email": "ana@example.com",
            "startDate": ""
        });
        let fields: Vec<_> = validate_employee_payload(&payload)
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["phone2", "startDate"]);
    }
}
