pub mod auth;
pub mod bookings;
pub mod cart;
pub mod orders;
pub mod products;

/// Loose shape check: one `@`, non-empty local part, dotted domain.
pub fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.len() > 254 {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && local.len() <= 64
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::looks_like_email;

    #[test]
    fn email_shape() {
        assert!(looks_like_email("adam@electropro.com"));
        assert!(looks_like_email(" john@example.com "));
        assert!(!looks_like_email("john@example"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("a@b@c.com"));
        assert!(!looks_like_email("john.example.com"));
        assert!(!looks_like_email("john@example."));
    }
}
