//! Score bucketing and recommendation text.
//!
//! Thresholds and advice lines are fixed policy. Every prediction lands
//! in one of three buckets; each bucket contributes a base observation,
//! zero or more input-conditional notes, and a closing action item.

use crate::features::FeatureVector;

/// Productivity bucket for a rounded score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    HighPotential,
    Good,
    NeedsSupport,
}

impl Category {
    /// Bucket a rounded score. Both boundaries belong to `Good`.
    pub fn from_score(score: f64) -> Self {
        if score > 0.80 {
            Category::HighPotential
        } else if score >= 0.60 {
            Category::Good
        } else {
            Category::NeedsSupport
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::HighPotential => "High Potential",
            Category::Good => "Good",
            Category::NeedsSupport => "Needs Support",
        }
    }

    /// Display color the form page uses for the result card.
    pub fn color(&self) -> &'static str {
        match self {
            Category::HighPotential => "blue",
            Category::Good => "green",
            Category::NeedsSupport => "orange",
        }
    }
}

/// Assembled advice for one prediction.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub category: Category,
    pub recommendation: String,
}

/// Round a raw model output to the 2-decimal score the service reports.
/// Halfway cases round to even, matching `numpy.round`.
pub fn round_score(raw: f64) -> f64 {
    (raw * 100.0).round_ties_even() / 100.0
}

/// Bucket the rounded score and assemble the recommendation lines.
pub fn assess(score: f64, features: &FeatureVector) -> Assessment {
    let smv = features.get_by_name("smv").unwrap_or(0.0);
    let wip = features.get_by_name("wip").unwrap_or(0.0);
    let style_changes = features.get_by_name("no_of_style_change").unwrap_or(0.0);

    let category = Category::from_score(score);
    let mut lines: Vec<&str> = Vec::new();

    match category {
        Category::HighPotential => {
            lines.push("This score indicates a top performer for this task configuration.");
            if smv > 20.0 {
                lines.push(
                    "Excelling at a high-complexity task (SMV > 20) is a great sign. \
                     Consider this employee for more challenging assignments.",
                );
            }
            lines.push(
                "ACTION: Discuss career growth and consider for mentorship roles to aid retention.",
            );
        }
        Category::Good => {
            lines.push("This employee is predicted to be a consistent and reliable performer.");
            if style_changes > 0.0 {
                lines.push("Maintaining solid productivity despite style changes shows adaptability.");
            }
            lines.push(
                "ACTION: Reinforce positive work habits and provide standard professional \
                 development opportunities.",
            );
        }
        Category::NeedsSupport => {
            lines.push("This employee may benefit from additional guidance for this task.");
            if smv > 25.0 {
                lines.push(
                    "The high SMV suggests this is a complex task; ensure the employee has \
                     received adequate training.",
                );
            }
            if wip > 1000.0 {
                lines.push(
                    "A high Work-in-Progress (WIP) level might be creating pressure or bottlenecks.",
                );
            }
            lines.push(
                "ACTION: Consider a coaching session to identify potential blockers and offer support.",
            );
        }
    }

    let recommendation = lines
        .iter()
        .map(|line| format!("• {}", line))
        .collect::<Vec<_>>()
        .join("\n");

    Assessment {
        category,
        recommendation,
    }
}
