mod rdf;

use std::sync::LazyLock;

use regex::Regex;

pub use rdf::validate_doap;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[_A-Za-z0-9-]+(\.[_A-Za-z0-9-]+)*@[A-Za-z0-9]+(\.[A-Za-z0-9]+)*(\.[A-Za-z]{2,})$")
        .expect("valid regex")
});

pub fn is_valid_email(s: &str) -> bool {
    !s.is_empty() && EMAIL_RE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("jdoe@example.org"));
        assert!(is_valid_email("j.doe-1@mail.example.co.uk"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("jdoe"));
        assert!(!is_valid_email("jdoe@localhost"));
        assert!(!is_valid_email("jdoe@example.c"));
        assert!(!is_valid_email("j doe@example.org"));
    }
}
