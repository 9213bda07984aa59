//! Feature schema for the productivity model.
//!
//! The model consumes a fixed 20-slot vector. The slot names and their
//! order below are the training artifact's input contract and must not
//! be reordered.

/// Feature names in the exact order the model expects them.
///
/// Slots 0-9 are numeric inputs taken directly from the form. Slots
/// 10-19 are one-hot indicators for the categorical fields; the
/// reference categories (Quarter1, non-sewing departments, Monday)
/// have no slot and are represented by an all-zero group.
pub const MODEL_FEATURES: &[&str] = &[
    "team",
    "targeted_productivity",
    "smv",
    "wip",
    "over_time",
    "incentive",
    "idle_time",
    "idle_men",
    "no_of_style_change",
    "no_of_workers",
    "quarter_Quarter2",
    "quarter_Quarter3",
    "quarter_Quarter4",
    "quarter_Quarter5",
    "department_sweing", // dataset spelling
    "day_Saturday",
    "day_Sunday",
    "day_Thursday",
    "day_Tuesday",
    "day_Wednesday",
];

/// Total number of model features.
pub const FEATURE_COUNT: usize = 20;

/// Form fields that must not be negative, in the order they are
/// checked. The first offender is the one reported to the client.
pub const NON_NEGATIVE_FIELDS: &[&str] = &[
    "wip",
    "over_time",
    "incentive",
    "idle_time",
    "idle_men",
    "no_of_style_change",
    "no_of_workers",
];

/// Categorical selector fields. A submitted value `v` maps onto the
/// indicator slot named `<key>_<v>` when such a slot exists.
pub const CATEGORICAL_KEYS: &[&str] = &["quarter", "department", "day"];

/// Get the slot index for a feature name.
pub fn feature_index(name: &str) -> Option<usize> {
    MODEL_FEATURES.iter().position(|&n| n == name)
}

/// Get the feature name for a slot index.
pub fn feature_name(index: usize) -> Option<&'static str> {
    MODEL_FEATURES.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count_matches_layout() {
        assert_eq!(MODEL_FEATURES.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_feature_order_is_fixed() {
        assert_eq!(MODEL_FEATURES[0], "team");
        assert_eq!(MODEL_FEATURES[9], "no_of_workers");
        assert_eq!(MODEL_FEATURES[10], "quarter_Quarter2");
        assert_eq!(MODEL_FEATURES[14], "department_sweing");
        assert_eq!(MODEL_FEATURES[19], "day_Wednesday");
    }

    #[test]
    fn test_feature_index_lookup() {
        assert_eq!(feature_index("team"), Some(0));
        assert_eq!(feature_index("smv"), Some(2));
        assert_eq!(feature_index("quarter_Quarter5"), Some(13));
        assert_eq!(feature_index("day_Monday"), None);
        assert_eq!(feature_index("quarter_Quarter1"), None);
    }

    #[test]
    fn test_feature_name_lookup() {
        assert_eq!(feature_name(0), Some("team"));
        assert_eq!(feature_name(19), Some("day_Wednesday"));
        assert_eq!(feature_name(FEATURE_COUNT), None);
    }

    #[test]
    fn test_non_negative_fields_are_model_features() {
        for field in NON_NEGATIVE_FIELDS {
            assert!(feature_index(field).is_some(), "unknown field {}", field);
        }
    }

    #[test]
    fn test_non_negative_check_order() {
        assert_eq!(NON_NEGATIVE_FIELDS.first(), Some(&"wip"));
        assert_eq!(NON_NEGATIVE_FIELDS.last(), Some(&"no_of_workers"));
    }

    #[test]
    fn test_no_duplicate_features() {
        for (i, a) in MODEL_FEATURES.iter().enumerate() {
            for b in &MODEL_FEATURES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
