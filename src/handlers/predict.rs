//! Prediction handler

use std::collections::HashMap;

use axum::extract::State;
use axum::{Form, Json};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::features;
use crate::recommend;
use crate::AppState;

/// Response body for a successful prediction.
///
/// `score` is serialized as a fixed 2-decimal string so equal inputs
/// produce byte-identical bodies.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub score: String,
    pub category: &'static str,
    pub color: &'static str,
    pub recommendation: String,
}

/// Score one employee record submitted by the form.
///
/// The model check runs before the body is interpreted, so a degraded
/// instance answers every prediction the same way whatever the client
/// sends. A body that does not decode as a form counts as an empty one.
pub async fn predict(
    State(state): State<AppState>,
    form: Option<Form<HashMap<String, String>>>,
) -> AppResult<Json<PredictResponse>> {
    let model = state.model.as_ref().ok_or(AppError::ModelUnavailable)?;

    // Option swallows the extractor rejection: a non-form content type
    // or undecodable body becomes an empty map here, not a 415.
    let form = form.map(|Form(form)| form).unwrap_or_default();

    features::validate_non_negative(&form)?;
    let vector = features::vector_from_form(&form)?;

    let raw = model.predict(&vector)?;
    let score = recommend::round_score(raw);
    let assessment = recommend::assess(score, &vector);

    tracing::debug!(
        "Prediction: score={:.2} category={}",
        score,
        assessment.category.label()
    );

    Ok(Json(PredictResponse {
        score: format!("{:.2}", score),
        category: assessment.category.label(),
        color: assessment.category.color(),
        recommendation: assessment.recommendation,
    }))
}
