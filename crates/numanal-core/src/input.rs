//! Whitespace-tokenized parsing of free-form terminal input.
//!
//! A blank line yields an empty vector, which callers treat as "cancel".
//! The first token that fails to parse rejects the whole line, so a
//! partially valid entry is never acted on.

use crate::error::InputError;

/// Parses every whitespace-separated token of `line` as an integer.
pub fn parse_ints(line: &str) -> Result<Vec<i64>, InputError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| InputError::InvalidInteger {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parses every whitespace-separated token of `line` as a finite float.
///
/// `inf` and `NaN` are accepted by `f64::from_str` but are rejected here.
pub fn parse_floats(line: &str) -> Result<Vec<f64>, InputError> {
    line.split_whitespace()
        .map(|token| match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(InputError::InvalidFloat {
                token: token.to_string(),
            }),
        })
        .collect()
}

/// Interprets a yes/no answer. Returns `None` for anything else.
pub fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_is_empty() {
        assert_eq!(parse_ints("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_ints("   \t ").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_floats("\n").unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn parses_multiple_ints() {
        assert_eq!(parse_ints(" 10 20\t30 ").unwrap(), vec![10, 20, 30]);
        assert_eq!(parse_ints("-4 0").unwrap(), vec![-4, 0]);
    }

    #[test]
    fn bad_token_rejects_whole_line() {
        let err = parse_ints("10 2x 30").unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidInteger {
                token: "2x".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "\"2x\" cannot be converted to an integer"
        );
    }

    #[test]
    fn floats_reject_non_finite() {
        assert_eq!(parse_floats("0.5 1e-3").unwrap(), vec![0.5, 0.001]);
        assert!(matches!(
            parse_floats("inf"),
            Err(InputError::InvalidFloat { .. })
        ));
        assert!(matches!(
            parse_floats("NaN"),
            Err(InputError::InvalidFloat { .. })
        ));
        assert!(matches!(
            parse_floats("0.1 abc"),
            Err(InputError::InvalidFloat { token }) if token == "abc"
        ));
    }

    #[test]
    fn yes_no_answers() {
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no(" yes "), Some(true));
        assert_eq!(parse_yes_no("No"), Some(false));
        assert_eq!(parse_yes_no("n"), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
        assert_eq!(parse_yes_no(""), None);
    }
}
