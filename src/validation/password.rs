/// True if pw is at least 8 chars long
pub fn is_valid_password(pw: &str) -> bool {
    pw.len() >= 8
}

/// True if the sign-up password and its confirmation field carry the same
/// value. The session service itself never sees the confirmation; callers
/// run this check at the boundary.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}
