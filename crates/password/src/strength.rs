//! Password strength indicator.
//!
//! The score combines length and character variety into a value
//! between 0 and 100 for display next to a generated password.
//! It is a user interface heuristic and says nothing reliable about
//! how hard a password is to guess; use [`measure_entropy`] for
//! that.
use serde::{Deserialize, Serialize};
use std::fmt;
use zxcvbn::{zxcvbn, Entropy};

use crate::config::Configuration;

/// Measure the entropy in a password.
pub fn measure_entropy(password: &str, user_inputs: &[&str]) -> Entropy {
    zxcvbn(password, user_inputs)
}

/// Label for a strength score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum StrengthLabel {
    /// Below the medium threshold.
    Weak,
    /// Below the strong threshold.
    Medium,
    /// Below the very strong threshold.
    Strong,
    /// At or above the very strong threshold.
    VeryStrong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weak => write!(f, "Weak"),
            Self::Medium => write!(f, "Medium"),
            Self::Strong => write!(f, "Strong"),
            Self::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

/// Strength of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strength {
    /// Score between 0 and 100.
    pub percent: u8,
    /// Label for the score.
    pub label: StrengthLabel,
}

/// Tuning for the strength heuristic.
///
/// The defaults are the values the generator UI has always used;
/// they are not derived from any entropy model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrengthConfig {
    /// Maximum score awarded for length.
    pub length_weight: f64,
    /// Length that earns the full length score.
    pub full_length: usize,
    /// Maximum score awarded for character variety.
    pub variety_weight: f64,
    /// Passwords shorter than this are penalized.
    pub short_length: usize,
    /// Multiplier applied to short passwords.
    pub short_penalty: f64,
    /// Multiplier applied when custom elements are switched on.
    pub custom_bonus: f64,
    /// Lowest score labelled medium.
    pub medium_threshold: f64,
    /// Lowest score labelled strong.
    pub strong_threshold: f64,
    /// Lowest score labelled very strong.
    pub very_strong_threshold: f64,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            length_weight: 25.0,
            full_length: 32,
            variety_weight: 75.0,
            short_length: 8,
            short_penalty: 0.6,
            custom_bonus: 1.1,
            medium_threshold: 40.0,
            strong_threshold: 70.0,
            very_strong_threshold: 90.0,
        }
    }
}

impl StrengthConfig {
    /// Compute the unrounded score for a password.
    pub fn score(&self, password: &str, custom_elements: bool) -> f64 {
        let len = password.chars().count();

        let length_score = (len as f64 / self.full_length as f64
            * self.length_weight)
            .min(self.length_weight);
        let variety_score =
            variety(password) as f64 / 4.0 * self.variety_weight;

        let mut score = length_score + variety_score;
        if len < self.short_length {
            score *= self.short_penalty;
        }
        if custom_elements {
            score *= self.custom_bonus;
        }
        score.clamp(0.0, 100.0)
    }

    /// Label for a score.
    pub fn label(&self, score: f64) -> StrengthLabel {
        if score < self.medium_threshold {
            StrengthLabel::Weak
        } else if score < self.strong_threshold {
            StrengthLabel::Medium
        } else if score < self.very_strong_threshold {
            StrengthLabel::Strong
        } else {
            StrengthLabel::VeryStrong
        }
    }
}

/// Estimate the strength of a password using the default tuning.
pub fn estimate(password: &str, config: &Configuration) -> Strength {
    estimate_with(password, config, &StrengthConfig::default())
}

/// Estimate the strength of a password.
///
/// The label is chosen from the unrounded score.
pub fn estimate_with(
    password: &str,
    config: &Configuration,
    tuning: &StrengthConfig,
) -> Strength {
    let score = tuning.score(password, config.has_custom_elements());
    Strength {
        percent: score.round() as u8,
        label: tuning.label(score),
    }
}

/// Number of character classes present, from zero to four.
fn variety(password: &str) -> usize {
    [
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ]
    .into_iter()
    .filter(|present| *present)
    .count()
}
