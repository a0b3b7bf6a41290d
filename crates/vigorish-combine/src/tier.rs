//! Tier and recommendation bands over the confidence scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Conviction tier derived from confidence by fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    /// Confidence 80+: every signal family pointing the same way.
    GoldenConvergence,
    /// Confidence 70-79: strong multi-signal alignment.
    SuperSignal,
    /// Confidence 60-69: good signal convergence.
    HarmonicAlignment,
    /// Below 60: some signals aligned, no strong read.
    PartialAlignment,
}

impl Tier {
    /// Classifies a confidence value into its tier band.
    ///
    /// Classification is a pure function of confidence alone; there is no
    /// hysteresis and no history.
    #[must_use]
    pub const fn from_confidence(confidence: i32) -> Self {
        if confidence >= 80 {
            Self::GoldenConvergence
        } else if confidence >= 70 {
            Self::SuperSignal
        } else if confidence >= 60 {
            Self::HarmonicAlignment
        } else {
            Self::PartialAlignment
        }
    }

    /// Wire label, e.g. `"GOLDEN_CONVERGENCE"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GoldenConvergence => "GOLDEN_CONVERGENCE",
            Self::SuperSignal => "SUPER_SIGNAL",
            Self::HarmonicAlignment => "HARMONIC_ALIGNMENT",
            Self::PartialAlignment => "PARTIAL_ALIGNMENT",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action label derived from confidence by fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    /// Confidence 80+.
    Smash,
    /// Confidence 70-79.
    Strong,
    /// Confidence 60-69.
    Play,
    /// Confidence 55-59.
    Lean,
    /// Below 55.
    Pass,
}

impl Recommendation {
    /// Classifies a confidence value into its action band.
    #[must_use]
    pub const fn from_confidence(confidence: i32) -> Self {
        if confidence >= 80 {
            Self::Smash
        } else if confidence >= 70 {
            Self::Strong
        } else if confidence >= 60 {
            Self::Play
        } else if confidence >= 55 {
            Self::Lean
        } else {
            Self::Pass
        }
    }

    /// Wire label, e.g. `"SMASH"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Smash => "SMASH",
            Self::Strong => "STRONG",
            Self::Play => "PLAY",
            Self::Lean => "LEAN",
            Self::Pass => "PASS",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
