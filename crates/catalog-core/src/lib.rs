//! Error normalization for the catalog API
//!
//! Every failure the HTTP boundary recognizes is a [`Failure`]. Each variant
//! knows its status and how to describe itself as a list of faults, and
//! [`Failure::translate`] turns it into the single [`ErrorEnvelope`] a client
//! receives.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod constraints;
mod envelope;
mod error;
mod failure;
mod path;

pub use constraints::MethodConstraints;
pub use envelope::{ErrorEnvelope, FaultDescriptor};
pub use error::HttpError;
pub use failure::{
    ConstraintViolation, DomainFailure, Failure, FieldError, FieldErrors, MissingParameter, TypeMismatch, Violations,
};
pub use path::last_segment;
