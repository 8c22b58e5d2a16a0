use http::StatusCode;

use crate::envelope::{ErrorEnvelope, FaultDescriptor};

/// Trait for failures that can be rendered as an error envelope
///
/// Implemented once per recognized failure category. The server layer only
/// ever sees the resulting status and envelope, keeping failure types
/// decoupled from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code answered for this failure
    fn status_code(&self) -> StatusCode;

    /// Machine-readable category (e.g. `constraint_violation`)
    fn error_type(&self) -> &'static str;

    /// Faults safe to expose to API consumers, never empty
    fn faults(&self) -> Vec<FaultDescriptor>;

    /// Build the envelope for this failure
    ///
    /// Mints a fresh trace id and timestamp on every call.
    fn to_envelope(&self) -> (StatusCode, ErrorEnvelope) {
        (self.status_code(), ErrorEnvelope::new(self.faults()))
    }
}
