//! Ordered field rules checked before a request reaches storage.
//!
//! Every rule is evaluated, so a response lists all violations of a request in
//! the order the rules are declared.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Body,
    Params,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub location: Location,
    pub field: &'static str,
    pub message: &'static str,
}

pub struct Rule<T: ?Sized> {
    location: Location,
    field: &'static str,
    check: fn(&T) -> bool,
    message: &'static str,
}

impl<T: ?Sized> Rule<T> {
    pub const fn body(field: &'static str, check: fn(&T) -> bool, message: &'static str) -> Self {
        Self {
            location: Location::Body,
            field,
            check,
            message,
        }
    }

    pub const fn params(
        field: &'static str,
        check: fn(&T) -> bool,
        message: &'static str,
    ) -> Self {
        Self {
            location: Location::Params,
            field,
            check,
            message,
        }
    }

    fn violation(&self) -> Violation {
        Violation {
            location: self.location,
            field: self.field,
            message: self.message,
        }
    }
}

/// Every rule `value` breaks, in declaration order.
pub fn violations<T: ?Sized>(value: &T, rules: &[Rule<T>]) -> Vec<Violation> {
    rules
        .iter()
        .filter(|rule| !(rule.check)(value))
        .map(Rule::violation)
        .collect()
}

pub fn validate<T: ?Sized>(value: &T, rules: &[Rule<T>]) -> Result<(), Vec<Violation>> {
    let violations = violations(value, rules);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// An optional sign followed by at least one decimal digit.
pub fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
