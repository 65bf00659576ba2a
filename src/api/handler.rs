//! Protocol envelopes and the getparams handler
//!
//! The ApplicationSet controller posts selection parameters wrapped as
//! `{"input": {"parameters": {...}}}` and expects the generated values
//! back as `{"output": {"parameters": [...]}}`, one entry per release.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::api::error::ApiError;
use crate::api::server::AppState;
use crate::release::selector::{append_latest, select};
use crate::release::semver::parse_version;
use crate::release::types::{Release, SelectionParameters};

/// Request envelope posted by the controller
#[derive(Debug, Deserialize)]
pub struct ParamsRequest {
    pub input: Input,
}

#[derive(Debug, Deserialize)]
pub struct Input {
    pub parameters: SelectionParameters,
}

/// Response envelope carrying the generated parameter sets
#[derive(Debug, Serialize)]
pub struct ParamsResponse {
    pub output: Output,
}

#[derive(Debug, Serialize)]
pub struct Output {
    pub parameters: Vec<Release>,
}

/// Fetches the repository tags and answers with the curated release list.
///
/// The minimum version is validated before any upstream traffic so a
/// malformed request never spends API rate limit budget.
pub async fn get_params(
    State(state): State<AppState>,
    payload: Result<Json<ParamsRequest>, JsonRejection>,
) -> Result<Json<ParamsResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        error!("failed to decode request body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })?;

    let params = request.input.parameters;

    if let Err(e) = parse_version(&params.min_release) {
        error!("invalid minimum version: {}", params.min_release);
        return Err(e.into());
    }

    debug!("fetching releases for {}", params.repository);
    let releases = state.tags.fetch_tags(&params.repository).await.map_err(|e| {
        error!("failed to fetch releases: {}", e);
        ApiError::from(e)
    })?;
    debug!("fetched {} releases", releases.len());

    let mut selected = select(releases, &params).map_err(|e| {
        error!("failed to filter releases: {}", e);
        ApiError::from(e)
    })?;

    if params.with_latest {
        selected = append_latest(selected);
    }

    debug!(
        "returning {} releases after filtering with min_release of {}",
        selected.len(),
        params.min_release
    );

    Ok(Json(ParamsResponse {
        output: Output {
            parameters: selected,
        },
    }))
}
