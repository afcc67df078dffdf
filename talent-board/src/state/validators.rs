use crate::state::DraftField;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "Name is required";
pub const INVALID_EMAIL: &str = "Enter a valid email address";

/// Zero-width no-break space. Counts as blank for names and emails.
const BOM: char = '\u{feff}';

/// local@domain.tld where no part contains '@' or whitespace
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s\x{FEFF}]+@[^@\s\x{FEFF}]+\.[^@\s\x{FEFF}]+$")
        .expect("email pattern is a valid regex")
});

/// Field-scoped validation messages, rebuilt from scratch on every submit
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<DraftField, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: DraftField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Trim Unicode whitespace and U+FEFF from both ends
pub fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

pub fn validate_name(name: &str) -> Result<(), String> {
    if trim_blank(name).is_empty() {
        return Err(NAME_REQUIRED.to_string());
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(INVALID_EMAIL.to_string());
    }
    Ok(())
}

/// Validate the application draft's free-text fields
pub fn validate_application(name: &str, email: &str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_name(name) {
        errors.insert(DraftField::Name, e);
    }
    if let Err(e) = validate_email(email) {
        errors.insert(DraftField::Email, e);
    }

    errors
}
