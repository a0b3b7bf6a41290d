//! Signal trait for producing confidence evidence.
//!
//! This module defines the `Signal` trait, the core abstraction for scoring
//! a game from raw context inputs. Signals can represent market reads
//! (sharp money, line value), situational angles (rest, injuries), or
//! esoteric heuristics (gematria, moon phase).

use crate::{GameContext, Result};
use serde::{Deserialize, Serialize};

/// The neutral score meaning "no information", on the engine's 0-100 scale.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// One unit of evidence produced by a signal.
///
/// The `score` lives on a fixed 0-100 scale where 50 is neutral. The
/// `contribution` is a human-readable explanation used for display only;
/// no arithmetic ever consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalOutput {
    /// Score on the 0-100 scale (50 = no information).
    pub score: f64,
    /// Display-only explanation of how the score was reached.
    pub contribution: String,
}

impl SignalOutput {
    /// Creates an output from a score and explanation.
    pub fn new(score: f64, contribution: impl Into<String>) -> Self {
        Self {
            score,
            contribution: contribution.into(),
        }
    }

    /// Creates a neutral output, used when a signal's inputs are missing.
    pub fn neutral(contribution: impl Into<String>) -> Self {
        Self::new(NEUTRAL_SCORE, contribution)
    }
}

/// A scoring heuristic that reads game context and emits one signal.
///
/// Implementations must be pure functions of the supplied context: no
/// clock reads, no randomness, no shared state. They must also be
/// thread-safe (`Send + Sync`) so a slate of games can be scored in
/// parallel.
///
/// Missing inputs are not errors. A signal whose data is absent from the
/// context returns [`SignalOutput::neutral`] with an explanation; `Err` is
/// reserved for genuinely malformed context.
///
/// # Example
///
/// ```
/// use vigorish_traits::{GameContext, Result, Signal, SignalOutput};
///
/// struct HomeChalk;
///
/// impl Signal for HomeChalk {
///     fn name(&self) -> &str {
///         "home_chalk"
///     }
///
///     fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput> {
///         match ctx.spread {
///             Some(s) if s < 0.0 => Ok(SignalOutput::new(60.0, "Home favorite")),
///             Some(_) => Ok(SignalOutput::new(55.0, "Home dog")),
///             None => Ok(SignalOutput::neutral("No spread posted")),
///         }
///     }
///
///     fn required_fields(&self) -> &[&str] {
///         &["spread"]
///     }
/// }
/// ```
pub trait Signal: Send + Sync {
    /// Returns the unique name of this signal.
    ///
    /// The name keys the weight table entry and the aggregation map, so it
    /// must be stable across releases.
    fn name(&self) -> &str;

    /// Scores the supplied game context.
    ///
    /// # Errors
    ///
    /// Returns an error only for malformed context; absent optional inputs
    /// produce a neutral output instead.
    fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput>;

    /// Context fields this signal reads when present.
    ///
    /// Used for documentation and introspection (`vig signals --verbose`);
    /// absence of a listed field never fails evaluation.
    fn required_fields(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sport;

    struct FixedSignal {
        name: String,
        score: f64,
    }

    impl Signal for FixedSignal {
        fn name(&self) -> &str {
            &self.name
        }

        fn evaluate(&self, _ctx: &GameContext) -> Result<SignalOutput> {
            Ok(SignalOutput::new(self.score, "fixed"))
        }

        fn required_fields(&self) -> &[&str] {
            &[]
        }
    }

    #[test]
    fn test_signal_name() {
        let signal = FixedSignal {
            name: "test_signal".to_string(),
            score: 75.0,
        };
        assert_eq!(signal.name(), "test_signal");
    }

    #[test]
    fn test_signal_evaluate() {
        let signal = FixedSignal {
            name: "test".to_string(),
            score: 75.0,
        };
        let ctx = GameContext::new(Sport::Nba, "Lakers", "Celtics");
        let out = signal.evaluate(&ctx).unwrap();
        assert_eq!(out.score, 75.0);
        assert_eq!(out.contribution, "fixed");
    }

    #[test]
    fn test_neutral_output() {
        let out = SignalOutput::neutral("No data");
        assert_eq!(out.score, NEUTRAL_SCORE);
        assert_eq!(out.contribution, "No data");
    }

    #[test]
    fn test_signal_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Box<dyn Signal>>();
    }
}
