//! Informational agreement check between two directional scores.
//!
//! The confluence check compares the engine's own confidence against an
//! independently derived score (typically an esoteric-only blend) and
//! classifies their agreement. The result is presentation-layer only; it
//! never feeds back into confidence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence floor for the primary score to count as strong.
const MAIN_STRONG_FLOOR: f64 = 70.0;

/// Confidence floor for the secondary score to count as strong.
const OTHER_STRONG_FLOOR: f64 = 65.0;

/// Directional pick attached to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Backing the home side.
    Home,
    /// Backing the away side.
    Away,
    /// Backing the over on the total.
    Over,
    /// Backing the under on the total.
    Under,
}

impl Direction {
    /// Whether two picks directly contradict each other.
    ///
    /// Picks from different markets (a side versus a total) neither agree
    /// nor oppose.
    #[must_use]
    pub const fn opposes(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Home, Self::Away)
                | (Self::Away, Self::Home)
                | (Self::Over, Self::Under)
                | (Self::Under, Self::Over)
        )
    }
}

/// A score paired with the pick it argues for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalScore {
    /// Confidence on the 0-100 scale.
    pub score: f64,
    /// The side this score backs.
    pub pick: Direction,
}

impl DirectionalScore {
    /// Creates a directional score.
    #[must_use]
    pub const fn new(score: f64, pick: Direction) -> Self {
        Self { score, pick }
    }
}

/// Agreement classification between two directional scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfluenceLevel {
    /// Both scores at 80+ on the same pick.
    Perfect,
    /// Main at 75+ and other at 70+ on the same pick.
    Strong,
    /// Both past their strong floors on the same pick.
    Moderate,
    /// Exactly one score past its strong floor.
    Partial,
    /// Both past their strong floors on opposite picks.
    Divergent,
    /// No meaningful agreement.
    None,
}

impl ConfluenceLevel {
    /// Wire label, e.g. `"PERFECT"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Perfect => "PERFECT",
            Self::Strong => "STRONG",
            Self::Moderate => "MODERATE",
            Self::Partial => "PARTIAL",
            Self::Divergent => "DIVERGENT",
            Self::None => "NONE",
        }
    }
}

impl fmt::Display for ConfluenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies agreement between the primary score and a secondary one.
///
/// Thresholds are fixed: strong floors of 70 (main) and 65 (other), with
/// `PERFECT` at 80/80 and `STRONG` at 75/70 when the picks agree. Two
/// strong scores on opposing picks are `DIVERGENT`. Picks from unrelated
/// markets can never align or oppose, so they classify `NONE` at best.
///
/// # Example
///
/// ```
/// use vigorish_combine::{ConfluenceLevel, Direction, DirectionalScore, check_confluence};
///
/// let main = DirectionalScore::new(84.0, Direction::Home);
/// let esoteric = DirectionalScore::new(81.0, Direction::Home);
/// assert_eq!(check_confluence(&main, &esoteric), ConfluenceLevel::Perfect);
/// ```
#[must_use]
pub const fn check_confluence(
    main: &DirectionalScore,
    other: &DirectionalScore,
) -> ConfluenceLevel {
    let main_strong = main.score >= MAIN_STRONG_FLOOR;
    let other_strong = other.score >= OTHER_STRONG_FLOOR;
    let aligned = matches!(
        (main.pick, other.pick),
        (Direction::Home, Direction::Home)
            | (Direction::Away, Direction::Away)
            | (Direction::Over, Direction::Over)
            | (Direction::Under, Direction::Under)
    );

    if main_strong && other_strong && main.pick.opposes(&other.pick) {
        ConfluenceLevel::Divergent
    } else if aligned && main.score >= 80.0 && other.score >= 80.0 {
        ConfluenceLevel::Perfect
    } else if aligned && main.score >= 75.0 && other.score >= 70.0 {
        ConfluenceLevel::Strong
    } else if aligned && main_strong && other_strong {
        ConfluenceLevel::Moderate
    } else if main_strong != other_strong {
        ConfluenceLevel::Partial
    } else {
        ConfluenceLevel::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home(score: f64) -> DirectionalScore {
        DirectionalScore::new(score, Direction::Home)
    }

    fn away(score: f64) -> DirectionalScore {
        DirectionalScore::new(score, Direction::Away)
    }

    #[test]
    fn test_perfect() {
        assert_eq!(
            check_confluence(&home(85.0), &home(80.0)),
            ConfluenceLevel::Perfect
        );
    }

    #[test]
    fn test_strong() {
        assert_eq!(
            check_confluence(&home(76.0), &home(71.0)),
            ConfluenceLevel::Strong
        );
        // 80/75 clears the strong bar but not perfect's 80/80.
        assert_eq!(
            check_confluence(&home(80.0), &home(75.0)),
            ConfluenceLevel::Strong
        );
    }

    #[test]
    fn test_moderate() {
        assert_eq!(
            check_confluence(&home(72.0), &home(66.0)),
            ConfluenceLevel::Moderate
        );
    }

    #[test]
    fn test_partial_when_one_strong() {
        assert_eq!(
            check_confluence(&home(85.0), &home(40.0)),
            ConfluenceLevel::Partial
        );
        assert_eq!(
            check_confluence(&home(40.0), &away(85.0)),
            ConfluenceLevel::Partial
        );
    }

    #[test]
    fn test_divergent_beats_perfect_band() {
        // Both at 85 but on opposite sides is a contradiction, not perfect
        // alignment.
        assert_eq!(
            check_confluence(&home(85.0), &away(85.0)),
            ConfluenceLevel::Divergent
        );
    }

    #[test]
    fn test_none_when_both_weak() {
        assert_eq!(
            check_confluence(&home(55.0), &home(50.0)),
            ConfluenceLevel::None
        );
    }

    #[test]
    fn test_cross_market_never_aligns() {
        let main = DirectionalScore::new(85.0, Direction::Home);
        let other = DirectionalScore::new(85.0, Direction::Over);
        assert_eq!(check_confluence(&main, &other), ConfluenceLevel::None);
    }

    #[test]
    fn test_direction_opposition() {
        assert!(Direction::Home.opposes(&Direction::Away));
        assert!(Direction::Under.opposes(&Direction::Over));
        assert!(!Direction::Home.opposes(&Direction::Over));
        assert!(!Direction::Home.opposes(&Direction::Home));
    }
}
