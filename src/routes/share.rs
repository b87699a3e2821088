//! Share ("magic") link endpoints
//!
//! - POST `/share` - store the submitted pair, return the short key
//! - GET `/share?id=...` - replay a stored pair through an auto-submitting
//!   form; failures redirect back to `/` with an error code
//! - GET `/share/keys` - live cache keys, for diagnostics

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::format::Mode;
use crate::share::SharePayload;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ShareForm {
    #[serde(default)]
    a: String,
    #[serde(default)]
    b: String,
    #[serde(default)]
    mode: String,
}

#[derive(Serialize)]
pub struct ShareCreated {
    id: String,
}

#[derive(Serialize)]
pub struct ShareKeys {
    keys: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    #[serde(default)]
    id: String,
}

/// POST /share
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ShareForm>,
) -> Result<Json<ShareCreated>, AppError> {
    let payload = SharePayload::new(
        form.a.trim_end_matches(['\r', '\n']).to_owned(),
        form.b.trim_end_matches(['\r', '\n']).to_owned(),
        Mode::from_form_value(&form.mode),
    );

    let blob = payload.to_bytes()?;
    state
        .share_store()
        .add(payload.cache_key().to_owned(), blob)
        .await;

    tracing::info!(id = %payload.short_id, format = payload.format.as_str(), "created share entry");

    Ok(Json(ShareCreated {
        id: payload.short_id,
    }))
}

/// GET /share?id=...
pub async fn resolve(State(state): State<AppState>, Query(query): Query<ResolveQuery>) -> Response {
    if query.id.is_empty() {
        tracing::warn!("no share link id provided");
        return Redirect::to("/?error=no_id").into_response();
    }

    let Some(blob) = state.share_store().get(&query.id).await else {
        tracing::warn!(id = %query.id, "share link not found or expired");
        return Redirect::to("/?error=not_found").into_response();
    };

    let payload = match SharePayload::from_bytes(&blob) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::error!(id = %query.id, error = %err, "failed to decode share payload");
            return Redirect::to("/?error=payload_invalid").into_response();
        }
    };

    tracing::info!(id = %query.id, "share link resolved");
    Html(state.renderer().resubmit_form(&payload)).into_response()
}

/// GET /share/keys
pub async fn peek_keys(State(state): State<AppState>) -> Json<ShareKeys> {
    let keys = state
        .share_store()
        .peek_all()
        .await
        .into_iter()
        .map(|(key, _)| key)
        .collect();
    Json(ShareKeys { keys })
}
