/// Case-fold a plate number or VIN to the stored form.
///
/// Every plate and VIN is stored and compared upper-cased, so `abc-123` and
/// `ABC-123` name the same vehicle.
pub fn normalize_identifier(value: &str) -> String {
    value.to_uppercase()
}

/// Treat an absent or empty optional string as missing
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_identifier_upper_cases() {
        assert_eq!(normalize_identifier("abc-123"), "ABC-123");
        assert_eq!(normalize_identifier("ABC-123"), "ABC-123");
        assert_eq!(
            normalize_identifier("1hgcm82633a004352"),
            "1HGCM82633A004352"
        );
    }

    #[test]
    fn test_normalize_identifier_keeps_other_characters() {
        assert_eq!(normalize_identifier("ab 12-c"), "AB 12-C");
        assert_eq!(normalize_identifier(""), "");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".into())), Some("x".to_string()));
    }
}
