#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/vigorish-dev/vigorish/issues/")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # vigorish
//!
//! Weighted signal engine for sports-betting confidence scores.
//!
//! vigorish is an umbrella crate that re-exports all vigorish sub-crates for
//! convenience. It provides a unified API for scoring games from raw context
//! inputs, blending the scores through a fixed weight table, and classifying
//! the result.
//!
//! ## Quick Start
//!
//! ```
//! use vigorish::prelude::*;
//! use vigorish::combine::{BonusInputs, WeightTable, aggregate};
//! use vigorish::signals::{default_signals, evaluate_all};
//!
//! # fn main() -> Result<()> {
//! let mut ctx = GameContext::new(Sport::Nba, "Lakers", "Celtics");
//! ctx.spread = Some(-4.5);
//! ctx.spread_odds = Some(-105);
//!
//! let outputs = evaluate_all(&default_signals(), &ctx);
//! let bonus = BonusInputs {
//!     has_market_odds: ctx.has_market_odds(),
//! };
//! let result = aggregate(&outputs, &WeightTable::default(), &bonus);
//! assert!((0..=100).contains(&result.confidence));
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core type definitions ([`Signal`], [`GameContext`], etc.)
//! - [`signals`] - The shipped signal set from the signals crate
//! - [`combine`] - Weighted aggregation, tiers, and confluence
//! - [`odds`] - The Odds API client
//!
//! ## Architecture
//!
//! vigorish follows a modular architecture:
//!
//! 1. **Signals** score a game context on a 0-100 scale, 50 neutral
//! 2. **The weight table** fixes how much each signal matters
//! 3. **The aggregator** blends scores into confidence, tier, recommendation
//! 4. **The confluence check** reports agreement between two directional
//!    scores, informationally

/// Version information for the vigorish crate.
///
/// This constant contains the current version of vigorish as specified in
/// Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Core type definitions for vigorish.
///
/// This module re-exports the foundational types that define the vigorish
/// API:
///
/// - [`Signal`] - A scoring heuristic over game context
/// - [`GameContext`] - Raw inputs for one aggregation call
/// - [`SignalOutput`] - A score plus its display explanation
/// - [`EngineError`] - The engine's error type
pub mod traits {
    pub use vigorish_traits::*;
}

// Re-export core types at top level for convenience
pub use vigorish_traits::{GameContext, Signal, SignalOutput, Sport};

// Re-export error types
pub use vigorish_traits::{EngineError, Result};

// Re-export the headline result types
pub use vigorish_combine::{AggregateResult, Recommendation, Tier};

// ============================================================================
// Signal Implementations
// ============================================================================

/// Signal implementations.
///
/// This module re-exports the signals crate, which contains the shipped
/// signal set organized by category:
///
/// ## Market
///
/// - **Sharp money**: money versus ticket percentage divergence
/// - **Line edge**: spread juice as a value read
/// - **Public fade / crush zone**: one-sided public action
/// - **Goldilocks**: spread magnitude zones and the trap gate
///
/// ## Situational
///
/// - **Injury vacuum**: usage vacuum from absent players
/// - **Travel fatigue / back-to-back**: rest and scheduling spots
///
/// ## Esoteric
///
/// - **Gematria, moon phase, numerology, zodiac**: date and name heuristics
/// - **Jarvis triggers**: the 2178 table over combined team gematria
///
/// ## Protocol
///
/// - **NHL dog protocol**: the three-condition puck-line stack
pub mod signals {
    pub use vigorish_signals::*;
}

// ============================================================================
// Aggregation
// ============================================================================

/// Weighted aggregation and classification.
///
/// This module contains the aggregator that blends named signal scores into
/// a single confidence, the fixed default weight table, the tier and
/// recommendation bands, and the informational confluence check.
///
/// # Example
///
/// ```
/// use vigorish::combine::{BonusInputs, SignalMap, WeightTable, aggregate};
/// use vigorish::traits::SignalOutput;
///
/// let mut signals = SignalMap::new();
/// signals.insert("sharp_money".into(), SignalOutput::new(87.0, "22% divergence"));
/// let result = aggregate(&signals, &WeightTable::default(), &BonusInputs::default());
/// assert_eq!(result.confidence, 87);
/// ```
pub mod combine {
    pub use vigorish_combine::*;
}

// ============================================================================
// Odds Feed
// ============================================================================

/// The Odds API client.
///
/// This module provides access to live odds boards: sports listings plus
/// spreads, totals, and moneyline markets per event.
///
/// ## Setup
///
/// 1. Get an API key at <https://the-odds-api.com/>
/// 2. Set the `ODDS_API_KEY` environment variable or add it to `.env`
///
/// ## Example
///
/// ```ignore
/// use vigorish::odds::OddsClient;
/// use vigorish::Sport;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = OddsClient::from_env()?;
///     let events = client.odds(Sport::Nba, "spreads,totals").await?;
///     println!("{} events on the board", events.len());
///     Ok(())
/// }
/// ```
pub mod odds {
    pub use vigorish_odds::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types for working with
/// vigorish. Import it with:
///
/// ```
/// use vigorish::prelude::*;
/// ```
///
/// This brings into scope:
/// - Core types: [`Signal`], [`GameContext`], [`SignalOutput`], [`Sport`]
/// - Result types: [`AggregateResult`], [`Tier`], [`Recommendation`]
/// - Error types: [`Result`], [`EngineError`]
pub mod prelude {
    pub use crate::traits::*;
    pub use crate::{AggregateResult, Recommendation, Tier};
    pub use crate::{EngineError, Result};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        // Version should be in semver format (x.y.z)
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        // This test verifies that all re-exports compile correctly
        // by using them in type annotations

        fn _accept_signal(_signal: &dyn Signal) {}
        fn _accept_context(_ctx: &GameContext) {}

        let _tier = Tier::GoldenConvergence;
        let _rec = Recommendation::Smash;
    }

    #[test]
    fn test_error_types() {
        // Verify Result type works
        let _result: Result<()> = Ok(());

        // Verify error conversion works
        let _error: EngineError = EngineError::Other("test".to_string());
    }

    #[test]
    fn test_full_pipeline_through_re_exports() {
        use crate::combine::{BonusInputs, WeightTable, aggregate};
        use crate::signals::{default_signals, evaluate_all};

        let ctx = GameContext::new(Sport::Nba, "Lakers", "Celtics");
        let outputs = evaluate_all(&default_signals(), &ctx);
        let result = aggregate(&outputs, &WeightTable::default(), &BonusInputs::default());
        assert!((0..=100).contains(&result.confidence));
    }
}
