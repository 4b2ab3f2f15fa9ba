//! HTTP API request handlers

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{debug, warn};

use super::types::{ErrorResponse, HealthResponse};
use crate::engine::ScanEngine;
use crate::types::Domain;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScanEngine>,
    pub whitelist: Arc<Vec<Domain>>,
}

/// Scan endpoint: multipart upload of newline-delimited candidate domains
/// under the `file` field, answered with the parent -> matches mapping.
pub async fn scan(State(state): State<AppState>, mut multipart: Multipart) -> impl IntoResponse {
    let mut upload: Option<String> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("file") {
                    continue;
                }
                match field.text().await {
                    Ok(text) => {
                        upload = Some(text);
                        break;
                    }
                    Err(err) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse::new(
                                "INVALID_UPLOAD",
                                format!("Failed to read uploaded file: {err}"),
                            )),
                        )
                            .into_response();
                    }
                }
            }
            Ok(None) => break,
            Err(err) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(
                        "INVALID_UPLOAD",
                        format!("Malformed multipart request: {err}"),
                    )),
                )
                    .into_response();
            }
        }
    }

    let Some(upload) = upload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "MISSING_FILE",
                "Expected a multipart field named 'file' with candidate domains",
            )),
        )
            .into_response();
    };

    let candidates = parse_candidates(&upload);
    if candidates.is_empty() {
        warn!("rejected scan request with empty candidate list");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "EMPTY_CANDIDATES",
                "The uploaded file contains no candidate domains",
            )),
        )
            .into_response();
    }

    debug!(
        "scan request: {} candidates against {} whitelisted parents",
        candidates.len(),
        state.whitelist.len()
    );

    let mapping = state.engine.run(&state.whitelist, &candidates).await;
    (StatusCode::OK, Json(mapping)).into_response()
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Split an uploaded blob into candidate domains, one per line.
///
/// Lines are trimmed and blank lines dropped; a blank candidate would
/// otherwise gate-match a blank whitelist row (two empty strings are lexically
/// identical).
pub fn parse_candidates(blob: &str) -> Vec<Domain> {
    blob.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_candidates_splits_and_trims() {
        let blob = "examp1e.com\n  paypa1.com \n\ngithub.com\n";
        assert_eq!(
            parse_candidates(blob),
            vec!["examp1e.com", "paypa1.com", "github.com"]
        );
    }

    #[test]
    fn parse_candidates_handles_crlf() {
        assert_eq!(parse_candidates("a.com\r\nb.com\r\n"), vec!["a.com", "b.com"]);
    }

    #[test]
    fn parse_candidates_empty_blob() {
        assert!(parse_candidates("").is_empty());
        assert!(parse_candidates("\n\n  \n").is_empty());
    }
}
