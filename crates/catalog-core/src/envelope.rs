use jiff::Timestamp;
use serde::Serialize;
use uuid::Uuid;

/// One attributable problem within an error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaultDescriptor {
    message: String,
    reason: String,
}

impl FaultDescriptor {
    pub fn new(message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            reason: reason.into(),
        }
    }

    /// Client-facing message, usually naming the offending parameter
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Rule or cause that produced the fault
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Uniform error response body
///
/// Serializes as `{ "timestamp", "traceId", "faults": [{ "message", "reason" }] }`.
/// The timestamp and trace id are minted on construction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    timestamp: Timestamp,
    trace_id: Uuid,
    faults: Vec<FaultDescriptor>,
}

impl ErrorEnvelope {
    pub(crate) fn new(faults: Vec<FaultDescriptor>) -> Self {
        debug_assert!(!faults.is_empty(), "error envelope must carry at least one fault");

        Self {
            timestamp: Timestamp::now(),
            trace_id: Uuid::new_v4(),
            faults,
        }
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Correlation id shared by the response body and the server log
    pub const fn trace_id(&self) -> Uuid {
        self.trace_id
    }

    pub fn faults(&self) -> &[FaultDescriptor] {
        &self.faults
    }
}
