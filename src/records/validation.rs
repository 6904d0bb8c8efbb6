use std::sync::LazyLock;

use regex::Regex;

/// Characters allowed anywhere in an email
static EMAIL_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9@._\-+=]*$").expect("email charset regex"));

/// Permissive email check.
///
/// The address must contain `@` and `.`, no spaces, and only ASCII letters,
/// digits and `@ . _ - + =`. Nothing else is checked.
pub fn is_valid_email(email: &str) -> bool {
    if !email.contains('@') || !email.contains('.') {
        return false;
    }
    if email.contains(' ') {
        return false;
    }
    EMAIL_CHARSET.is_match(email)
}

/// Empty or whitespace-only names are rejected on add and on edit.
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}
