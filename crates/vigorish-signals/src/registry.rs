//! Catalog of the shipped signal set.
//!
//! The registry is the display-facing directory of everything the engine
//! can evaluate: name, category, and a one-line description per signal.
//! The actual evaluation order lives in [`default_signals`](crate::default_signals).

use serde::{Deserialize, Serialize};
use std::fmt;

/// The broad family a signal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    /// Betting-market reads: splits, line value, sharp action.
    Market,
    /// Team circumstance: injuries, rest, travel.
    Situational,
    /// Numerological and astrological heuristics.
    Esoteric,
    /// Sport-specific multi-condition stacks.
    Protocol,
}

impl SignalCategory {
    /// Lowercase label used in listings and JSON.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Situational => "situational",
            Self::Esoteric => "esoteric",
            Self::Protocol => "protocol",
        }
    }
}

impl fmt::Display for SignalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry for one signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalInfo {
    /// Registry name, matching [`Signal::name`](vigorish_traits::Signal::name).
    pub name: &'static str,
    /// Family the signal belongs to.
    pub category: SignalCategory,
    /// One-line description for listings.
    pub description: &'static str,
}

/// Catalog of every shipped signal, in evaluation order.
#[must_use]
pub const fn available_signals() -> &'static [SignalInfo] {
    use SignalCategory::{Esoteric, Market, Protocol, Situational};
    &[
        SignalInfo {
            name: "sharp_money",
            category: Market,
            description: "Money vs ticket percentage divergence",
        },
        SignalInfo {
            name: "line_edge",
            category: Market,
            description: "Spread juice as a value read",
        },
        SignalInfo {
            name: "public_fade",
            category: Market,
            description: "Fade heavy one-sided public action",
        },
        SignalInfo {
            name: "crush_zone",
            category: Market,
            description: "Public overload on favorites",
        },
        SignalInfo {
            name: "goldilocks",
            category: Market,
            description: "Spread magnitude sweet spot and trap gate",
        },
        SignalInfo {
            name: "injury_vacuum",
            category: Situational,
            description: "Usage vacuum from absent rotation players",
        },
        SignalInfo {
            name: "travel_fatigue",
            category: Situational,
            description: "Rest-day differential between the sides",
        },
        SignalInfo {
            name: "back_to_back",
            category: Situational,
            description: "Zero-rest scheduling spots",
        },
        SignalInfo {
            name: "gematria",
            category: Esoteric,
            description: "Ordinal letter values of the team names",
        },
        SignalInfo {
            name: "moon_phase",
            category: Esoteric,
            description: "Lunar cycle position on game night",
        },
        SignalInfo {
            name: "numerology",
            category: Esoteric,
            description: "Life-path number of the game date",
        },
        SignalInfo {
            name: "zodiac",
            category: Esoteric,
            description: "Planetary ruler of the weekday",
        },
        SignalInfo {
            name: "jarvis_trigger",
            category: Esoteric,
            description: "Trigger-number detection over team gematria",
        },
        SignalInfo {
            name: "nhl_protocol",
            category: Protocol,
            description: "NHL puck-line dog condition stack",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_signals;

    #[test]
    fn test_registry_matches_default_set() {
        let catalog: Vec<&str> = available_signals().iter().map(|info| info.name).collect();
        let built: Vec<String> = default_signals()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(catalog, built);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(SignalCategory::Market.as_str(), "market");
        assert_eq!(SignalCategory::Protocol.to_string(), "protocol");
    }

    #[test]
    fn test_every_entry_described() {
        for info in available_signals() {
            assert!(!info.description.is_empty(), "{} undescribed", info.name);
        }
    }
}
