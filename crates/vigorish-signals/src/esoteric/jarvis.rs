//! Jarvis trigger numbers and the 2178 validation.
//!
//! The trigger table holds the proven edge numbers, headed by 2178, the
//! only four-digit number whose reversal is itself times four and whose
//! product with that reversal is 66 to the fourth.

use serde::{Deserialize, Serialize};
use std::fmt;
use vigorish_traits::{GameContext, Result, Signal, SignalOutput};

use super::gematria_value;

/// Tesla's pattern digits.
pub const TESLA_NUMBERS: [u64; 3] = [3, 6, 9];

/// Conviction tier attached to a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TriggerTier {
    /// Standard trigger numbers.
    High,
    /// Reserved for 2178.
    Legendary,
}

impl TriggerTier {
    /// Wire label, e.g. `"LEGENDARY"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Legendary => "LEGENDARY",
        }
    }
}

impl fmt::Display for TriggerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the trigger table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerInfo {
    /// The trigger number itself.
    pub number: u64,
    /// Display name.
    pub name: &'static str,
    /// Boost contributed by a direct hit.
    pub boost: f64,
    /// Conviction tier.
    pub tier: TriggerTier,
    /// Lore line for listings.
    pub description: &'static str,
    /// Whether the number's claim is a provable arithmetic identity.
    pub mathematical: bool,
}

const TRIGGERS: [TriggerInfo; 5] = [
    TriggerInfo {
        number: 2178,
        name: "THE IMMORTAL",
        boost: 20.0,
        tier: TriggerTier::Legendary,
        description: "Only number where n x 4 = reverse AND n x reverse = 66^4. Never collapses.",
        mathematical: true,
    },
    TriggerInfo {
        number: 201,
        name: "THE ORDER",
        boost: 12.0,
        tier: TriggerTier::High,
        description: "Jesuit Order gematria. The Event of 201.",
        mathematical: false,
    },
    TriggerInfo {
        number: 33,
        name: "THE MASTER",
        boost: 10.0,
        tier: TriggerTier::High,
        description: "Highest master number. Masonic significance.",
        mathematical: false,
    },
    TriggerInfo {
        number: 93,
        name: "THE WILL",
        boost: 10.0,
        tier: TriggerTier::High,
        description: "Thelema sacred number. Will and Love.",
        mathematical: false,
    },
    TriggerInfo {
        number: 322,
        name: "THE SOCIETY",
        boost: 10.0,
        tier: TriggerTier::High,
        description: "Skull & Bones. Genesis 3:22.",
        mathematical: false,
    },
];

/// The full trigger table, strongest first.
#[must_use]
pub const fn trigger_table() -> &'static [TriggerInfo] {
    &TRIGGERS
}

/// Sum of a number's decimal digits.
#[must_use]
pub const fn digit_sum(mut n: u64) -> u64 {
    let mut total = 0;
    while n > 0 {
        total += n % 10;
        n /= 10;
    }
    total
}

/// Repeated digit sum down to a single digit.
#[must_use]
pub const fn digit_root(mut n: u64) -> u64 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// Result of running a value through the trigger checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerCheck {
    /// The value that was checked.
    pub value: u64,
    /// Whether any trigger fired.
    pub triggered: bool,
    /// Trigger numbers that fired, in check order.
    pub triggers: Vec<u64>,
    /// Accumulated boost across all checks.
    pub total_boost: f64,
    /// Best tier among direct hits.
    pub highest_tier: Option<TriggerTier>,
    /// One line per check that fired.
    pub details: Vec<String>,
}

/// Runs a value through the five trigger checks.
///
/// In order: the digit sequence `2178` appearing anywhere in the value, a
/// direct table match, a digit-root match against any table entry (at half
/// boost), divisibility by 33, and a Tesla 3-6-9 digit root. Boosts
/// accumulate across checks; each trigger number is only credited once.
#[must_use]
pub fn check_trigger(value: u64) -> TriggerCheck {
    let mut check = TriggerCheck {
        value,
        triggered: false,
        triggers: Vec::new(),
        total_boost: 0.0,
        highest_tier: None,
        details: Vec::new(),
    };

    if value.to_string().contains("2178") {
        check.triggered = true;
        check.triggers.push(2178);
        check.total_boost += TRIGGERS[0].boost;
        check.highest_tier = Some(TriggerTier::Legendary);
        check
            .details
            .push("Contains THE IMMORTAL sequence (2178)".to_string());
    }

    if let Some(info) = TRIGGERS.iter().find(|t| t.number == value)
        && !check.triggers.contains(&value)
    {
        check.triggered = true;
        check.triggers.push(value);
        check.total_boost += info.boost;
        if check.highest_tier != Some(TriggerTier::Legendary) {
            check.highest_tier = Some(info.tier);
        }
        check.details.push(format!("Direct match: {}", info.name));
    }

    let reduced = digit_root(value);
    for info in &TRIGGERS {
        if !check.triggers.contains(&info.number) && digit_root(info.number) == reduced {
            check.triggered = true;
            check.triggers.push(info.number);
            check.total_boost += info.boost * 0.5;
            check
                .details
                .push(format!("Reduces to same as {}", info.name));
        }
    }

    if value % 33 == 0 && !check.triggers.contains(&33) {
        check.triggered = true;
        check.triggers.push(33);
        check.total_boost += 5.0;
        check.details.push("Divisible by THE MASTER (33)".to_string());
    }

    if TESLA_NUMBERS.contains(&reduced) {
        check.total_boost += 2.0;
        check
            .details
            .push(format!("Tesla alignment: reduces to {reduced}"));
    }

    check
}

/// The arithmetic identities that make 2178 the immortal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmortalValidation {
    /// The number, 2178.
    pub number: u64,
    /// Its digit reversal, 8712.
    pub reversal: u64,
    /// `number × reversal`.
    pub product: u64,
    /// 66 to the fourth power.
    pub sixty_six_fourth: u64,
    /// Whether both identities hold.
    pub validated: bool,
}

/// Verifies the two identities: `2178 × 4 = 8712` and `2178 × 8712 = 66⁴`.
#[must_use]
pub const fn validate_immortal() -> ImmortalValidation {
    let number = 2178u64;
    let reversal = 8712u64;
    let product = number * reversal;
    let sixty_six_fourth = 66u64 * 66 * 66 * 66;
    ImmortalValidation {
        number,
        reversal,
        product,
        sixty_six_fourth,
        validated: number * 4 == reversal && product == sixty_six_fourth,
    }
}

/// Runs the trigger checks over the combined gematria of the matchup.
///
/// Boost maps to score in fixed bands: 20+ is legendary territory at 95,
/// 10+ scores 75, 5+ scores 55, and a silent value scores 35.
#[derive(Debug, Clone, Copy, Default)]
pub struct JarvisTrigger;

impl Signal for JarvisTrigger {
    fn name(&self) -> &str {
        "jarvis_trigger"
    }

    fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput> {
        let combined = gematria_value(&ctx.home_team) + gematria_value(&ctx.away_team);
        let check = check_trigger(combined);

        let score = if check.total_boost >= 20.0 {
            95.0
        } else if check.total_boost >= 10.0 {
            75.0
        } else if check.total_boost >= 5.0 {
            55.0
        } else {
            35.0
        };

        let contribution = if check.details.is_empty() {
            format!("No trigger numbers in {combined}")
        } else {
            format!("{combined}: {}", check.details.join("; "))
        };

        Ok(SignalOutput::new(score, contribution))
    }

    fn required_fields(&self) -> &[&str] {
        &["home_team", "away_team"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vigorish_traits::Sport;

    #[test]
    fn test_digit_helpers() {
        assert_eq!(digit_sum(2178), 18);
        assert_eq!(digit_root(2178), 9);
        assert_eq!(digit_root(93), 3);
        assert_eq!(digit_root(7), 7);
        assert_eq!(digit_sum(0), 0);
    }

    #[test]
    fn test_immortal_validation() {
        let v = validate_immortal();
        assert!(v.validated);
        assert_eq!(v.product, 18_974_736);
        assert_eq!(v.product, v.sixty_six_fourth);
    }

    #[test]
    fn test_check_2178() {
        // Sequence hit (20) + divisible by 33 (5) + Tesla root 9 (2).
        let check = check_trigger(2178);
        assert!(check.triggered);
        assert_eq!(check.triggers, vec![2178, 33]);
        assert_relative_eq!(check.total_boost, 27.0);
        assert_eq!(check.highest_tier, Some(TriggerTier::Legendary));
    }

    #[test]
    fn test_check_direct_match_33() {
        // Direct hit (10) + Tesla root 6 (2).
        let check = check_trigger(33);
        assert!(check.triggered);
        assert_eq!(check.triggers, vec![33]);
        assert_relative_eq!(check.total_boost, 12.0);
        assert_eq!(check.highest_tier, Some(TriggerTier::High));
    }

    #[test]
    fn test_check_reduction_match() {
        // Root 3 matches THE ORDER (6) and THE WILL (5) at half boost,
        // plus Tesla (2).
        let check = check_trigger(12);
        assert!(check.triggered);
        assert_eq!(check.triggers, vec![201, 93]);
        assert_relative_eq!(check.total_boost, 13.0);
        assert_eq!(check.highest_tier, None);
    }

    #[test]
    fn test_check_silent_value() {
        let check = check_trigger(50);
        assert!(!check.triggered);
        assert!(check.triggers.is_empty());
        assert_relative_eq!(check.total_boost, 0.0);
    }

    #[test]
    fn test_embedded_sequence() {
        let check = check_trigger(121_780);
        assert!(check.triggers.contains(&2178));
        assert_eq!(check.highest_tier, Some(TriggerTier::Legendary));
    }

    #[test]
    fn test_signal_scores_by_boost() {
        // "U" = 21, "SSSSY" = 101... build names whose combined gematria
        // is a known value instead: "A" (1) + "B" (2) = 3, Tesla only.
        let ctx = GameContext::new(Sport::Nba, "A", "B");
        let out = JarvisTrigger.evaluate(&ctx).unwrap();
        // Boost 2 from Tesla alignment is below every band.
        assert_relative_eq!(out.score, 35.0);
    }

    #[test]
    fn test_signal_direct_trigger() {
        // "P" = 16 and "Q" = 17 combine to 33, THE MASTER.
        let ctx = GameContext::new(Sport::Nba, "P", "Q");
        let out = JarvisTrigger.evaluate(&ctx).unwrap();
        // Direct 10 + Tesla 2 clears the 10 band.
        assert_relative_eq!(out.score, 75.0);
        assert!(out.contribution.contains("THE MASTER"));
    }

    #[test]
    fn test_trigger_table_ordering() {
        let table = trigger_table();
        assert_eq!(table[0].number, 2178);
        assert!(table[0].mathematical);
        assert_eq!(table.len(), 5);
    }
}
