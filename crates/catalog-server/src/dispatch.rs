use axum::{
    Json,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use catalog_core::{Failure, HttpError};

/// Failure returned from a handler or extractor
///
/// On its own this renders as a bare status with the failure stashed in the
/// response extensions. [`dispatch_failures`] swaps that for the envelope.
#[derive(Debug)]
pub struct ApiError(Failure);

impl<E> From<E> for ApiError
where
    E: Into<Failure>,
{
    fn from(e: E) -> Self {
        Self(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = self.0.status_code().into_response();
        response.extensions_mut().insert(self.0);
        response
    }
}

/// Middleware that renders every failure escaping the inner routes
///
/// Responses without a failure pass through untouched, including axum's own
/// rejections for malformed bodies or query strings.
pub async fn dispatch_failures(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<Failure>() {
        Some(failure) => render(&failure),
        None => response,
    }
}

fn render(failure: &Failure) -> Response {
    let (status, envelope) = failure.translate();

    tracing::error!(
        trace_id = %envelope.trace_id(),
        error_type = failure.error_type(),
        status = status.as_u16(),
        error = ?failure,
        "TraceId: {} - {failure}",
        envelope.trace_id(),
    );
    catalog_telemetry::metrics::record_failure(failure.error_type(), status.as_u16());

    (status, Json(envelope)).into_response()
}
