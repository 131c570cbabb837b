use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").unwrap());

/// True if name is 1-64 chars of letters, digits, underscore or hyphen
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}
