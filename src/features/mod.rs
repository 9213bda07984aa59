//! Feature schema and construction of model input from request fields.

pub mod form;
pub mod layout;
pub mod vector;

pub use form::{validate_non_negative, vector_from_form, InputError};
pub use layout::{
    feature_index, feature_name, CATEGORICAL_KEYS, FEATURE_COUNT, MODEL_FEATURES,
    NON_NEGATIVE_FIELDS,
};
pub use vector::FeatureVector;
