use std::ops::RangeInclusive;

use crate::failure::{ConstraintViolation, Failure, Violations};

/// Collects constraint violations for the parameters of one operation
///
/// Every check runs, so a request that breaks several rules gets a fault for
/// each. Violations are recorded under `<operation>.<parameter>`.
#[derive(Debug)]
pub struct MethodConstraints {
    operation: &'static str,
    violations: Vec<ConstraintViolation>,
}

impl MethodConstraints {
    pub const fn new(operation: &'static str) -> Self {
        Self {
            operation,
            violations: Vec::new(),
        }
    }

    /// Value must contain at least one non-whitespace character
    #[must_use]
    pub fn not_blank(self, parameter: &str, value: &str, message: &str) -> Self {
        self.require(value.trim().is_empty(), parameter, message)
    }

    /// Value length in characters must fall within `range`
    #[must_use]
    pub fn size(self, parameter: &str, value: &str, range: RangeInclusive<usize>, message: &str) -> Self {
        let length = value.chars().count();
        self.require(!range.contains(&length), parameter, message)
    }

    /// Value must be strictly greater than zero
    #[must_use]
    pub fn positive(self, parameter: &str, value: i64, message: &str) -> Self {
        self.require(value <= 0, parameter, message)
    }

    /// Value must be zero or greater
    #[must_use]
    pub fn positive_or_zero(self, parameter: &str, value: i64, message: &str) -> Self {
        self.require(value < 0, parameter, message)
    }

    /// Value must not exceed `max`
    #[must_use]
    pub fn at_most(self, parameter: &str, value: i64, max: i64, message: &str) -> Self {
        self.require(value > max, parameter, message)
    }

    /// Finish the checks, failing if anything was violated
    pub fn check(self) -> Result<(), Failure> {
        match Violations::new(self.violations) {
            Some(violations) => Err(violations.into()),
            None => Ok(()),
        }
    }

    fn require(mut self, violated: bool, parameter: &str, message: &str) -> Self {
        if violated {
            self.violations.push(ConstraintViolation::new(
                format!("{}.{parameter}", self.operation),
                message,
            ));
        }
        self
    }
}
