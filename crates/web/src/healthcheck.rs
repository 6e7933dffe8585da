//! Liveness probe

use salvo::prelude::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
}

/// Answers `{"status":"ok"}` whenever the server is accepting requests.
#[handler]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
