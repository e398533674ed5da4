//! PII masking for contact fields.
//!
//! Applied at response time for callers without the `contacts:view_pii`
//! grant. Masking keeps enough of the value to recognize a record
//! (first character and domain of an email, last four digits of a phone
//! number) without exposing the full value.

/// Mask an email address, keeping the first character of the local part
/// and the full domain: `jane@acme.com` becomes `j***@acme.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next();
            match first {
                Some(c) => format!("{c}***@{domain}"),
                None => format!("***@{domain}"),
            }
        }
        None => "***".to_string(),
    }
}

/// Mask a phone number, keeping the last four characters:
/// `+1 555 123 4567` becomes `***********4567`.
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{visible}", "*".repeat(chars.len() - 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane@acme.com"), "j***@acme.com");
        assert_eq!(mask_email("j@acme.com"), "j***@acme.com");
        assert_eq!(mask_email("@acme.com"), "***@acme.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+1 555 123 4567"), "***********4567");
        assert_eq!(mask_phone("987654"), "**7654");
        assert_eq!(mask_phone("123"), "****");
        assert_eq!(mask_phone(""), "****");
    }
}
