//! Signal implementations for the Vigorish confidence engine.
//!
//! This crate provides the leaf heuristics across four categories:
//! - Market: sharp money, line value, public splits, spread zones
//! - Situational: injuries, rest and travel
//! - Esoteric: gematria, moon phase, numerology, zodiac, Jarvis triggers
//! - Protocol: sport-specific condition stacks (NHL dog protocol)
//!
//! Each signal is a pure function of [`GameContext`] producing a 0-100
//! score with 50 as the no-information point. Missing inputs score neutral
//! rather than failing.
//!
//! # Example
//!
//! ```
//! use vigorish_signals::{default_signals, evaluate_all};
//! use vigorish_traits::{GameContext, Sport};
//!
//! let ctx = GameContext::new(Sport::Nba, "Lakers", "Celtics");
//! let outputs = evaluate_all(&default_signals(), &ctx);
//! assert!(!outputs.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

use std::collections::BTreeMap;

use vigorish_traits::{GameContext, Signal, SignalOutput};

pub mod esoteric;
pub mod market;
pub mod protocol;
pub mod registry;
pub mod situational;

// Re-export key types
pub use registry::{SignalCategory, SignalInfo, available_signals};

/// Constructs the full production signal set in registry order.
#[must_use]
pub fn default_signals() -> Vec<Box<dyn Signal>> {
    vec![
        Box::new(market::SharpMoney),
        Box::new(market::LineEdge),
        Box::new(market::PublicFade),
        Box::new(market::CrushZone),
        Box::new(market::Goldilocks),
        Box::new(situational::InjuryVacuum),
        Box::new(situational::TravelFatigue),
        Box::new(situational::BackToBack),
        Box::new(esoteric::Gematria),
        Box::new(esoteric::MoonPhaseSignal),
        Box::new(esoteric::Numerology),
        Box::new(esoteric::Zodiac),
        Box::new(esoteric::JarvisTrigger),
        Box::new(protocol::NhlDogProtocol),
    ]
}

/// Runs every supplied signal over one context and collects the outputs.
///
/// Signals that error are skipped; the shipped set never errors, so a
/// smaller map than expected indicates a custom signal rejecting the
/// context.
#[must_use]
pub fn evaluate_all(
    signals: &[Box<dyn Signal>],
    ctx: &GameContext,
) -> BTreeMap<String, SignalOutput> {
    signals
        .iter()
        .filter_map(|signal| {
            signal
                .evaluate(ctx)
                .ok()
                .map(|output| (signal.name().to_string(), output))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vigorish_traits::Sport;

    #[test]
    fn test_default_signals_have_unique_names() {
        let signals = default_signals();
        let mut names: Vec<&str> = signals.iter().map(|s| s.name()).collect();
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn test_evaluate_all_covers_every_signal() {
        let signals = default_signals();
        let ctx = GameContext::new(Sport::Nba, "Lakers", "Celtics");
        let outputs = evaluate_all(&signals, &ctx);
        assert_eq!(outputs.len(), signals.len());
    }

    #[test]
    fn test_bare_context_scores_are_in_range() {
        let ctx = GameContext::new(Sport::Nfl, "Chiefs", "Bills");
        for (name, output) in evaluate_all(&default_signals(), &ctx) {
            assert!(
                (0.0..=100.0).contains(&output.score),
                "{name} out of range: {}",
                output.score
            );
        }
    }
}
