// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared validation predicates used by the value kinds.
//!
//! All bounds are inclusive. A choice list that is present but empty is a
//! configuration mistake and rejects every value; only an absent list means
//! "no constraint".

use crate::domain::errors::ValueError;
use std::fmt::Debug;

/// Checks that `value` is one of `choices`.
///
/// # Examples
///
/// ```
/// use cfgschema::domain::validation::validate_choice;
///
/// assert!(validate_choice(&"foo", None).is_ok());
/// assert!(validate_choice(&"foo", Some(&["foo", "bar"][..])).is_ok());
/// assert!(validate_choice(&"baz", Some(&["foo", "bar"][..])).is_err());
/// assert!(validate_choice(&"foo", Some(&[][..])).is_err());
/// ```
pub fn validate_choice<T>(value: &T, choices: Option<&[T]>) -> Result<(), ValueError>
where
    T: PartialEq + Debug,
{
    match choices {
        None => Ok(()),
        Some([]) => Err(ValueError::EmptyChoices),
        Some(choices) if choices.contains(value) => Ok(()),
        Some(choices) => Err(ValueError::NotAChoice {
            value: format!("{:?}", value),
            choices: format!("{:?}", choices),
        }),
    }
}

/// Checks that `value` is not below `minimum`.
///
/// # Examples
///
/// ```
/// use cfgschema::domain::validation::validate_minimum;
///
/// assert!(validate_minimum(0, Some(0)).is_ok());
/// assert!(validate_minimum(-1, Some(0)).is_err());
/// ```
pub fn validate_minimum<T>(value: T, minimum: Option<T>) -> Result<(), ValueError>
where
    T: PartialOrd + Debug,
{
    match minimum {
        Some(minimum) if value < minimum => Err(ValueError::BelowMinimum {
            value: format!("{:?}", value),
            minimum: format!("{:?}", minimum),
        }),
        _ => Ok(()),
    }
}

/// Checks that `value` is not above `maximum`.
pub fn validate_maximum<T>(value: T, maximum: Option<T>) -> Result<(), ValueError>
where
    T: PartialOrd + Debug,
{
    match maximum {
        Some(maximum) if value > maximum => Err(ValueError::AboveMaximum {
            value: format!("{:?}", value),
            maximum: format!("{:?}", maximum),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_choices_passes() {
        assert!(validate_choice(&"foo", None).is_ok());
    }

    #[test]
    fn test_valid_choice_passes() {
        assert!(validate_choice(&"foo", Some(&["foo", "bar", "baz"][..])).is_ok());
        assert!(validate_choice(&1, Some(&[1, 2, 3][..])).is_ok());
    }

    #[test]
    fn test_empty_choices_fails() {
        let result = validate_choice(&"foo", Some(&[][..]));
        assert!(matches!(result, Err(ValueError::EmptyChoices)));
    }

    #[test]
    fn test_invalid_choice_fails() {
        let words = ["foo", "bar", "baz"];
        assert!(validate_choice(&"foobar", Some(&words[..])).is_err());

        let error = validate_choice(&5, Some(&[1, 2, 3][..])).unwrap_err();
        assert_eq!(error.to_string(), "must be one of [1, 2, 3], not 5");
    }

    #[test]
    fn test_no_minimum_passes() {
        assert!(validate_minimum(10, None).is_ok());
    }

    #[test]
    fn test_valid_minimum_passes() {
        assert!(validate_minimum(10, Some(5)).is_ok());
        assert!(validate_minimum(5, Some(5)).is_ok());
    }

    #[test]
    fn test_too_small_value_fails() {
        assert!(validate_minimum(10, Some(20)).is_err());
    }

    #[test]
    fn test_too_small_value_fails_with_zero_as_minimum() {
        let error = validate_minimum(-1, Some(0)).unwrap_err();
        assert_eq!(error.to_string(), "-1 must be at least 0");
    }

    #[test]
    fn test_no_maximum_passes() {
        assert!(validate_maximum(5, None).is_ok());
    }

    #[test]
    fn test_valid_maximum_passes() {
        assert!(validate_maximum(5, Some(10)).is_ok());
        assert!(validate_maximum(0, Some(0)).is_ok());
    }

    #[test]
    fn test_too_large_value_fails() {
        assert!(validate_maximum(10, Some(5)).is_err());
    }

    #[test]
    fn test_too_large_value_fails_with_zero_as_maximum() {
        let error = validate_maximum(5, Some(0)).unwrap_err();
        assert_eq!(error.to_string(), "5 must be at most 0");
    }
}
