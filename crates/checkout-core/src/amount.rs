//! Checkout amount handling.
//!
//! The amount field is free text. Whatever the user typed goes to the
//! backend and the message widget untouched; only an empty field falls
//! back to [`DEFAULT_AMOUNT`].

/// Amount used when the input is empty or missing
pub const DEFAULT_AMOUNT: &str = "10.00";

/// Resolve the raw input value to the amount sent everywhere.
pub fn effective_amount(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_AMOUNT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_amount_uses_default() {
        assert_eq!(effective_amount(None), "10.00");
    }

    #[test]
    fn test_empty_amount_uses_default() {
        assert_eq!(effective_amount(Some("")), "10.00");
    }

    #[test]
    fn test_amount_passes_through_unvalidated() {
        assert_eq!(effective_amount(Some("25.50")), "25.50");
        assert_eq!(effective_amount(Some("abc")), "abc");
        assert_eq!(effective_amount(Some(" ")), " ");
    }
}
