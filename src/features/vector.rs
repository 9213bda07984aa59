//! Fixed-order feature vector.

use super::layout::{feature_index, FEATURE_COUNT};

/// Numeric input for the model, one slot per feature in schema order.
///
/// Slots default to zero, so anything a request does not mention stays
/// at the reference value.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create a zeroed vector.
    pub fn new() -> Self {
        Self {
            values: [0.0; FEATURE_COUNT],
        }
    }

    /// Set a slot value by index. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, value: f64) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }

    /// Get a slot value by index.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Get a slot value by feature name.
    pub fn get_by_name(&self, name: &str) -> Option<f64> {
        feature_index(name).and_then(|i| self.get(i))
    }

    /// Values in schema order, ready for tensor conversion.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}
