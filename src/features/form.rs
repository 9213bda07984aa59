//! Mapping of raw form fields onto feature slots.
//!
//! Construction runs in two passes over the schema so the result is
//! deterministic regardless of field order in the request: first every
//! form field that directly names a slot is parsed and assigned, then
//! the categorical selectors are folded onto their indicator slots.

use std::collections::HashMap;

use thiserror::Error;

use super::layout::{feature_index, CATEGORICAL_KEYS, MODEL_FEATURES, NON_NEGATIVE_FIELDS};
use super::vector::FeatureVector;

/// Rejected form input. The offending field name is echoed back to the
/// client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid input: \"{0}\" cannot be negative.")]
    Negative(String),
    #[error("Invalid input: \"{0}\" must be a number.")]
    NotANumber(String),
}

/// Check the non-negativity constrained fields, reporting the first
/// offender in check order. An absent field counts as zero here.
pub fn validate_non_negative(form: &HashMap<String, String>) -> Result<(), InputError> {
    for &field in NON_NEGATIVE_FIELDS {
        let value = match form.get(field) {
            Some(raw) => parse_number(field, raw)?,
            None => 0.0,
        };
        if value < 0.0 {
            return Err(InputError::Negative(field.to_string()));
        }
    }
    Ok(())
}

/// Build the model input from one form submission.
///
/// Unknown categorical values set nothing: they are the reference
/// categories and their indicator group stays all-zero.
pub fn vector_from_form(form: &HashMap<String, String>) -> Result<FeatureVector, InputError> {
    let mut vector = FeatureVector::new();

    for (index, &name) in MODEL_FEATURES.iter().enumerate() {
        if let Some(raw) = form.get(name) {
            vector.set(index, parse_number(name, raw)?);
        }
    }

    for &key in CATEGORICAL_KEYS {
        if let Some(value) = form.get(key) {
            if !value.is_empty() {
                if let Some(index) = feature_index(&format!("{}_{}", key, value)) {
                    vector.set(index, 1.0);
                }
            }
        }
    }

    Ok(vector)
}

/// Parse one form value as a float. Surrounding whitespace is accepted;
/// anything else that fails to parse is reported against `field`.
fn parse_number(field: &str, raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber(field.to_string()))
}
