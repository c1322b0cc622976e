//! Syntactic email address check.

use super::is_space;

/// Returns true if `token` looks like an email address.
///
/// Accepts exactly one `@` with a non-empty local part and a domain that has
/// a `.` with at least one character on each side. Whitespace is rejected
/// anywhere. No DNS or mailbox verification is done.
#[must_use]
pub fn is_valid_email(token: &str) -> bool {
    if token.chars().any(is_space) {
        return false;
    }

    let Some((local, domain)) = token.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // A dot that is neither the first nor the last character of the domain
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@example.com"));
        assert!(is_valid_email("user@sub.example.com"));
        assert!(is_valid_email("Bob@Test.COM"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_loose_domains_are_accepted() {
        // Only one inner dot is required; empty labels elsewhere pass.
        assert!(is_valid_email("user@example..com"));
        assert!(is_valid_email("user@.example.com"));
        assert!(is_valid_email("user@example.com."));
        assert!(is_valid_email("\"quoted\"@example.com"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@exa@mple.com"));
        assert!(!is_valid_email("c@d"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@com."));
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("user@example.com\n"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("\u{feff}user@example.com"));
    }
}
