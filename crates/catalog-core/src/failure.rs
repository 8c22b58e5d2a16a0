use std::fmt;

use http::StatusCode;
use thiserror::Error;

use crate::{
    envelope::{ErrorEnvelope, FaultDescriptor},
    error::HttpError,
    path::last_segment,
};

fn invalid_parameter(name: &str) -> String {
    format!("Invalid parameter: {name}")
}

/// Business rule failure raised by catalog logic
///
/// Carries the status to answer with; the boundary never second-guesses it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({reason})")]
pub struct DomainFailure {
    status: StatusCode,
    message: String,
    reason: String,
}

impl DomainFailure {
    pub fn new(status: StatusCode, message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            reason: reason.into(),
        }
    }

    /// Lookup by an id that does not exist
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Entity not found", "Wrong id")
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl HttpError for DomainFailure {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_type(&self) -> &'static str {
        "domain"
    }

    fn faults(&self) -> Vec<FaultDescriptor> {
        vec![FaultDescriptor::new(&self.message, &self.reason)]
    }
}

/// A request body field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field (e.g. `stockQuantity`)
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Non-empty set of field errors from one request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Returns `None` when there is nothing to report
    pub fn new(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }
}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("request body validation failed: ")?;
        write_joined(f, self.0.iter().map(|e| (e.field.as_str(), e.message.as_str())))
    }
}

impl std::error::Error for FieldErrors {}

impl HttpError for FieldErrors {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_type(&self) -> &'static str {
        "field_validation"
    }

    fn faults(&self) -> Vec<FaultDescriptor> {
        self.0
            .iter()
            .map(|error| FaultDescriptor::new(invalid_parameter(&error.field), &error.message))
            .collect()
    }
}

/// A method parameter that violated a declared constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    /// Dot-separated path, `<operation>.<parameter>`
    pub property_path: String,
    pub message: String,
}

impl ConstraintViolation {
    pub fn new(property_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property_path: property_path.into(),
            message: message.into(),
        }
    }

    /// Parameter the violation is attributed to
    pub fn parameter(&self) -> &str {
        last_segment(&self.property_path)
    }
}

/// Non-empty set of constraint violations from one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<ConstraintViolation>);

impl Violations {
    /// Returns `None` when there is nothing to report
    pub fn new(violations: Vec<ConstraintViolation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self(violations))
        }
    }

    pub fn as_slice(&self) -> &[ConstraintViolation] {
        &self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("constraint violations: ")?;
        write_joined(f, self.0.iter().map(|v| (v.property_path.as_str(), v.message.as_str())))
    }
}

impl std::error::Error for Violations {}

impl HttpError for Violations {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_type(&self) -> &'static str {
        "constraint_violation"
    }

    fn faults(&self) -> Vec<FaultDescriptor> {
        self.0
            .iter()
            .map(|violation| FaultDescriptor::new(invalid_parameter(violation.parameter()), &violation.message))
            .collect()
    }
}

/// A parameter whose raw value could not be converted to its declared type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to convert value '{value}' to required type '{expected}' for parameter '{parameter}': {cause}")]
pub struct TypeMismatch {
    pub parameter: String,
    pub value: String,
    pub expected: String,
    pub cause: String,
}

impl HttpError for TypeMismatch {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_type(&self) -> &'static str {
        "type_mismatch"
    }

    fn faults(&self) -> Vec<FaultDescriptor> {
        vec![FaultDescriptor::new(invalid_parameter(&self.parameter), self.to_string())]
    }
}

/// A required parameter that was absent from the request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Required request parameter '{parameter}' for method parameter type {expected} is not present")]
pub struct MissingParameter {
    pub parameter: String,
    pub expected: String,
}

impl HttpError for MissingParameter {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_type(&self) -> &'static str {
        "missing_parameter"
    }

    fn faults(&self) -> Vec<FaultDescriptor> {
        vec![FaultDescriptor::new(invalid_parameter(&self.parameter), self.to_string())]
    }
}

/// Every failure the HTTP boundary knows how to render
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    #[error(transparent)]
    Domain(#[from] DomainFailure),

    #[error(transparent)]
    FieldValidation(#[from] FieldErrors),

    #[error(transparent)]
    ConstraintViolation(#[from] Violations),

    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),

    #[error(transparent)]
    MissingParameter(#[from] MissingParameter),
}

impl Failure {
    /// Status and envelope to answer with
    pub fn translate(&self) -> (StatusCode, ErrorEnvelope) {
        self.to_envelope()
    }

    fn inner(&self) -> &dyn HttpError {
        match self {
            Self::Domain(failure) => failure,
            Self::FieldValidation(errors) => errors,
            Self::ConstraintViolation(violations) => violations,
            Self::TypeMismatch(mismatch) => mismatch,
            Self::MissingParameter(missing) => missing,
        }
    }
}

impl HttpError for Failure {
    fn status_code(&self) -> StatusCode {
        self.inner().status_code()
    }

    fn error_type(&self) -> &'static str {
        self.inner().error_type()
    }

    fn faults(&self) -> Vec<FaultDescriptor> {
        self.inner().faults()
    }
}

fn write_joined<'a>(f: &mut fmt::Formatter<'_>, pairs: impl Iterator<Item = (&'a str, &'a str)>) -> fmt::Result {
    for (i, (name, message)) in pairs.enumerate() {
        if i > 0 {
            f.write_str("; ")?;
        }
        write!(f, "{name}: {message}")?;
    }
    Ok(())
}
