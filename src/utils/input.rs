//! Front-end input sanitation. Everything that reaches the resolver has
//! passed through here.

use crate::errors::{AppError, AppResult};
use crate::models::{Action, LogFilter, PersonName};

pub const MIN_LIMIT: usize = 1;
pub const MAX_LIMIT: usize = 100;

/// Trim a required name field; empty (or whitespace-only) is rejected.
pub fn required_name(field: &'static str, value: &str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::validation(field, "must not be empty"));
    }
    Ok(v.to_string())
}

pub fn person(first: &str, last: &str) -> AppResult<PersonName> {
    Ok(PersonName {
        first_name: required_name("first name", first)?,
        last_name: required_name("last name", last)?,
    })
}

/// Optional filter value: blank means "no filter".
pub fn optional(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn action(value: Option<&String>) -> AppResult<Option<Action>> {
    match optional(value) {
        None => Ok(None),
        Some(v) => Action::from_user_str(&v)
            .map(Some)
            .ok_or(AppError::InvalidAction(v)),
    }
}

pub fn log_filter(
    first: Option<&String>,
    last: Option<&String>,
    act: Option<&String>,
) -> AppResult<LogFilter> {
    Ok(LogFilter {
        first_name: optional(first),
        last_name: optional(last),
        action: action(act)?,
    })
}

pub fn limit(value: Option<usize>, default: usize) -> AppResult<usize> {
    let l = value.unwrap_or(default);
    if !(MIN_LIMIT..=MAX_LIMIT).contains(&l) {
        return Err(AppError::validation(
            "limit",
            format!("must be between {MIN_LIMIT} and {MAX_LIMIT}, got {l}"),
        ));
    }
    Ok(l)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed_and_required() {
        let p = person("  John ", "Doe\t").unwrap();
        assert_eq!(p, PersonName::new("John", "Doe"));

        let err = person("   ", "Doe").unwrap_err();
        assert!(matches!(err, AppError::Validation { field: "first name", .. }));
    }

    #[test]
    fn limit_is_bounded() {
        assert_eq!(limit(None, 20).unwrap(), 20);
        assert_eq!(limit(Some(100), 20).unwrap(), 100);
        assert!(limit(Some(0), 20).is_err());
        assert!(limit(Some(101), 20).is_err());
    }

    #[test]
    fn blank_filters_are_ignored() {
        let blank = String::from("  ");
        let out = String::from("out");
        let f = log_filter(Some(&blank), None, Some(&out)).unwrap();
        assert_eq!(f.first_name, None);
        assert_eq!(f.action, Some(Action::CheckOut));

        let bad = String::from("lunch");
        assert!(matches!(
            action(Some(&bad)),
            Err(AppError::InvalidAction(_))
        ));
    }
}
