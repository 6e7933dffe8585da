//! Request-level logging and request IDs.

mod request_ids;
mod spans;

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, Span, error, info, warn};

use super::settings;

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// Open an `http.request` span around the rest of the chain and log how the
/// request ended.
///
/// The `x-request-id` header is honoured when usable, otherwise a fresh id is
/// generated. Either way it is echoed on the response and stored in the depot.
#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let started = Instant::now();

    let request_id =
        request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

    request_ids::set_request_id_header(res, &request_id);

    let path = req.uri().path().to_owned();

    let span = tracing::info_span!(
        parent: None,
        "http.request",
        request_id = %request_id,
        method = %req.method(),
        path = %path,
        route = %spans::route_for_path(&path),
        remote_addr = %req.remote_addr(),
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id);

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    let status = request_ids::response_status_or_ok(res.status_code);
    let threshold = Duration::from_millis(settings::slow_request_threshold_ms());

    report(&span, status, started.elapsed(), threshold);
}

/// How a finished request should be reported beyond the completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Success,
    ClientError,
    ServerError,
}

impl From<StatusCode> for Outcome {
    fn from(status: StatusCode) -> Self {
        if status.is_server_error() {
            Self::ServerError
        } else if status.is_client_error() {
            Self::ClientError
        } else {
            Self::Success
        }
    }
}

fn report(span: &Span, status: StatusCode, elapsed: Duration, threshold: Duration) {
    let status_code = status.as_u16();
    let duration_ms = elapsed.as_millis();

    span.record("status", status_code);
    span.record("duration_ms", duration_ms);

    span.in_scope(|| {
        info!(status = status_code, duration_ms, "request.completed");

        match Outcome::from(status) {
            Outcome::ServerError => error!(status = status_code, "server error response"),
            Outcome::ClientError => warn!(status = status_code, "client error response"),
            Outcome::Success => {}
        }

        if elapsed > threshold {
            warn!(
                duration_ms,
                threshold_ms = threshold.as_millis(),
                "slow request detected"
            );
        }
    });
}
