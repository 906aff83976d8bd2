//! Email token extraction shared by manual entry and file import

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ';' | '|')
}

/// Split on any run of whitespace, comma, semicolon or pipe
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_delimiter).filter(|t| !t.is_empty())
}

pub fn is_valid_email(token: &str) -> bool {
    EMAIL_PATTERN.is_match(token)
}

/// Valid addresses in input order. Invalid tokens are dropped.
pub fn extract_emails(text: &str) -> Vec<String> {
    tokens(text)
        .filter(|t| is_valid_email(t))
        .map(str::to_string)
        .collect()
}

/// Insert each address not already present, returning how many were new
pub fn merge_into(set: &mut IndexSet<String>, emails: impl IntoIterator<Item = String>) -> usize {
    emails.into_iter().filter(|e| set.insert(e.clone())).count()
}
