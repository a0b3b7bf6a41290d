//! The weighted multi-signal aggregator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vigorish_traits::SignalOutput;

use crate::tier::{Recommendation, Tier};
use crate::weights::WeightTable;

/// Confidence used when no signals are supplied or total weight is zero.
const NEUTRAL_CONFIDENCE: i32 = 50;

/// Fixed bonus applied when live market odds back the analysis.
const MARKET_ODDS_BONUS: i32 = 5;

/// How many top contributors are retained for explainability.
const TOP_SIGNAL_COUNT: usize = 3;

/// Named signal outputs feeding one aggregation call.
///
/// A `BTreeMap` keeps iteration deterministic and name-ordered, which makes
/// the aggregation order-independent by construction.
pub type SignalMap = BTreeMap<String, SignalOutput>;

/// Request-level facts that adjust confidence outside the weighted mean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusInputs {
    /// Whether live market odds were available for this analysis.
    pub has_market_odds: bool,
}

/// One signal ranked by its weighted impact, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSignal {
    /// Signal name.
    pub name: String,
    /// Raw 0-100 score the signal produced.
    pub score: f64,
    /// Weight applied from the table.
    pub weight: u32,
    /// `score × weight`, the ranking key.
    pub impact: f64,
    /// The signal's display explanation.
    pub contribution: String,
}

/// The output of one aggregation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Weighted-mean confidence, clamped to at most 100.
    pub confidence: i32,
    /// Conviction tier for this confidence.
    pub tier: Tier,
    /// Action label for this confidence.
    pub recommendation: Recommendation,
    /// The three highest-impact signals, for explainability only.
    pub top_signals: Vec<RankedSignal>,
}

/// Combines named signal scores into a single confidence and classification.
///
/// Computes the weight-normalized average of the supplied scores, adds the
/// fixed market-odds bonus when applicable, clamps to at most 100, and
/// classifies the result into tier and recommendation bands. Signals
/// missing from the weight table count with weight
/// [`DEFAULT_WEIGHT`](crate::DEFAULT_WEIGHT).
///
/// An empty signal map is valid input and yields the neutral confidence of
/// 50 (`PARTIAL_ALIGNMENT` / `PASS`). The function is pure: same inputs,
/// same result, with no clock or randomness involved.
///
/// Input scores are used as supplied. Only the final confidence is clamped,
/// and only from above; upstream producers stay within 0-100, so a negative
/// confidence can only arise from a caller feeding negative scores.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use vigorish_combine::{BonusInputs, Recommendation, Tier, WeightTable, aggregate};
/// use vigorish_traits::SignalOutput;
///
/// let mut signals = BTreeMap::new();
/// signals.insert("sharp_money".into(), SignalOutput::new(95.0, "22% divergence"));
/// signals.insert("line_edge".into(), SignalOutput::new(82.0, "-104"));
/// signals.insert("public_fade".into(), SignalOutput::new(50.0, "No lean"));
///
/// let result = aggregate(&signals, &WeightTable::default(), &BonusInputs::default());
/// assert_eq!(result.confidence, 81);
/// assert_eq!(result.tier, Tier::GoldenConvergence);
/// assert_eq!(result.recommendation, Recommendation::Smash);
/// ```
#[must_use]
pub fn aggregate(signals: &SignalMap, weights: &WeightTable, bonus: &BonusInputs) -> AggregateResult {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0u64;

    for (name, output) in signals {
        let weight = weights.weight(name);
        weighted_sum += output.score * f64::from(weight);
        total_weight += u64::from(weight);
    }

    let mut confidence = if total_weight > 0 {
        (weighted_sum / total_weight as f64).round() as i32
    } else {
        NEUTRAL_CONFIDENCE
    };

    if bonus.has_market_odds {
        confidence += MARKET_ODDS_BONUS;
    }
    confidence = confidence.min(100);

    AggregateResult {
        confidence,
        tier: Tier::from_confidence(confidence),
        recommendation: Recommendation::from_confidence(confidence),
        top_signals: rank_signals(signals, weights),
    }
}

/// Ranks signals by weighted impact and keeps the top three.
///
/// Ties break on name so the ranking is deterministic.
fn rank_signals(signals: &SignalMap, weights: &WeightTable) -> Vec<RankedSignal> {
    let mut ranked: Vec<RankedSignal> = signals
        .iter()
        .map(|(name, output)| {
            let weight = weights.weight(name);
            RankedSignal {
                name: name.clone(),
                score: output.score,
                weight,
                impact: output.score * f64::from(weight),
                contribution: output.contribution.clone(),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.impact
            .partial_cmp(&a.impact)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked.truncate(TOP_SIGNAL_COUNT);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn signal_map(entries: &[(&str, f64)]) -> SignalMap {
        entries
            .iter()
            .map(|&(name, score)| (name.to_string(), SignalOutput::new(score, name)))
            .collect()
    }

    #[test]
    fn test_reference_scenario() {
        // sharp_money 95×22 + line_edge 82×18 + public_fade 50×11 = 4116;
        // total weight 51; 4116/51 = 80.7 rounds to 81.
        let signals = signal_map(&[
            ("sharp_money", 95.0),
            ("line_edge", 82.0),
            ("public_fade", 50.0),
        ]);
        let result = aggregate(&signals, &WeightTable::default(), &BonusInputs::default());
        assert_eq!(result.confidence, 81);
        assert_eq!(result.tier, Tier::GoldenConvergence);
        assert_eq!(result.recommendation, Recommendation::Smash);
    }

    #[test]
    fn test_empty_signals_neutral() {
        let result = aggregate(
            &SignalMap::new(),
            &WeightTable::default(),
            &BonusInputs::default(),
        );
        assert_eq!(result.confidence, 50);
        assert_eq!(result.tier, Tier::PartialAlignment);
        assert_eq!(result.recommendation, Recommendation::Pass);
        assert!(result.top_signals.is_empty());
    }

    #[test]
    fn test_determinism() {
        let signals = signal_map(&[("sharp_money", 73.0), ("gematria", 65.0), ("zodiac", 60.0)]);
        let weights = WeightTable::default();
        let bonus = BonusInputs::default();
        let first = aggregate(&signals, &weights, &bonus);
        for _ in 0..10 {
            assert_eq!(aggregate(&signals, &weights, &bonus), first);
        }
    }

    #[test]
    fn test_uniform_scores_ignore_weights() {
        // When every score is equal, the weighted mean is that score no
        // matter how the weights are distributed.
        for score in [37.0, 50.0, 88.0] {
            let signals = signal_map(&[
                ("sharp_money", score),
                ("zodiac", score),
                ("totally_unknown_signal", score),
            ]);
            let result = aggregate(&signals, &WeightTable::default(), &BonusInputs::default());
            assert_eq!(result.confidence, score.round() as i32);
        }
    }

    #[test]
    fn test_monotonicity_in_single_score() {
        let weights = WeightTable::default();
        let bonus = BonusInputs::default();
        let mut last = i32::MIN;
        for bump in 0..=50 {
            let signals = signal_map(&[
                ("sharp_money", 50.0 + f64::from(bump)),
                ("line_edge", 60.0),
                ("moon_phase", 55.0),
            ]);
            let confidence = aggregate(&signals, &weights, &bonus).confidence;
            assert!(confidence >= last);
            last = confidence;
        }
    }

    #[test]
    fn test_missing_weight_defaults_to_one() {
        let signals = signal_map(&[("totally_unknown_signal", 90.0)]);
        let result = aggregate(&signals, &WeightTable::default(), &BonusInputs::default());
        assert_eq!(result.confidence, 90);
        assert_eq!(result.top_signals[0].weight, 1);
    }

    #[test]
    fn test_odds_bonus_adds_exactly_five() {
        let signals = signal_map(&[("sharp_money", 60.0), ("line_edge", 70.0)]);
        let weights = WeightTable::default();
        let without = aggregate(&signals, &weights, &BonusInputs::default());
        let with = aggregate(
            &signals,
            &weights,
            &BonusInputs {
                has_market_odds: true,
            },
        );
        assert_eq!(with.confidence - without.confidence, 5);
    }

    #[test]
    fn test_odds_bonus_clamps_at_100() {
        let signals = signal_map(&[("sharp_money", 98.0)]);
        let result = aggregate(
            &signals,
            &WeightTable::default(),
            &BonusInputs {
                has_market_odds: true,
            },
        );
        assert_eq!(result.confidence, 100);
        assert_eq!(result.tier, Tier::GoldenConvergence);
    }

    #[test]
    fn test_top_signals_ranked_by_impact() {
        let signals = signal_map(&[
            ("sharp_money", 60.0), // 60×22 = 1320
            ("line_edge", 80.0),   // 80×18 = 1440
            ("gematria", 95.0),    // 95×3  = 285
            ("public_fade", 85.0), // 85×11 = 935
        ]);
        let result = aggregate(&signals, &WeightTable::default(), &BonusInputs::default());
        let names: Vec<&str> = result.top_signals.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["line_edge", "sharp_money", "public_fade"]);
        assert_relative_eq!(result.top_signals[0].impact, 1440.0);
    }

    #[test]
    fn test_top_signals_tie_breaks_on_name() {
        let signals = signal_map(&[("alpha", 80.0), ("beta", 80.0)]);
        let result = aggregate(&signals, &WeightTable::empty(), &BonusInputs::default());
        assert_eq!(result.top_signals[0].name, "alpha");
        assert_eq!(result.top_signals[1].name, "beta");
    }

    #[test]
    fn test_top_signals_capped_at_three() {
        let signals = signal_map(&[
            ("a", 50.0),
            ("b", 60.0),
            ("c", 70.0),
            ("d", 80.0),
            ("e", 90.0),
        ]);
        let result = aggregate(&signals, &WeightTable::empty(), &BonusInputs::default());
        assert_eq!(result.top_signals.len(), 3);
    }

    #[test]
    fn test_zero_weight_table_still_averages() {
        // With an empty table every signal weighs 1, so the confidence is
        // the plain mean.
        let signals = signal_map(&[("a", 40.0), ("b", 60.0)]);
        let result = aggregate(&signals, &WeightTable::empty(), &BonusInputs::default());
        assert_eq!(result.confidence, 50);
    }
}
