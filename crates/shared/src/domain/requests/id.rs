use crate::errors::ServiceError;

/// Parses a path/query identifier that must be a positive integer.
///
/// Only plain ASCII digits are accepted, so `-1`, `+1`, `1.5` and `abc` are
/// all rejected, as is `0`.
pub fn parse_positive_id(raw: &str, label: &str) -> Result<i64, ServiceError> {
    let invalid = || ServiceError::InvalidInput(format!("{label} must be a positive integer"));

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case("42", 42)]
    #[case("007", 7)]
    fn accepts_positive_integers(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_positive_id(raw, "Customer ID").unwrap(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("-1")]
    #[case("0")]
    #[case("1.5")]
    #[case("")]
    #[case(" 3")]
    #[case("99999999999999999999")]
    fn rejects_everything_else(#[case] raw: &str) {
        let err = parse_positive_id(raw, "Customer ID").unwrap_err();

        match err {
            ServiceError::InvalidInput(msg) => assert!(msg.starts_with("Customer ID")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
