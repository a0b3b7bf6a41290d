//! Static per-signal weight registry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weight applied to any signal without an explicit table entry.
///
/// Unregistered names get minimum influence rather than an error; a new
/// signal producer works immediately and its weight is tuned afterwards by
/// adding a table entry.
pub const DEFAULT_WEIGHT: u32 = 1;

/// Mapping from signal name to its relative importance in the weighted mean.
///
/// The table is an explicit configuration value handed to [`aggregate`]
/// rather than a process-wide global, so registry growth is an auditable
/// config change. [`WeightTable::default`] carries the calibrated entries;
/// lookups for names outside the table fall back to [`DEFAULT_WEIGHT`].
///
/// [`aggregate`]: crate::aggregate
///
/// # Example
///
/// ```
/// use vigorish_combine::{DEFAULT_WEIGHT, WeightTable};
///
/// let table = WeightTable::default();
/// assert_eq!(table.weight("sharp_money"), 22);
/// assert_eq!(table.weight("totally_unknown_signal"), DEFAULT_WEIGHT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTable {
    weights: BTreeMap<String, u32>,
}

impl WeightTable {
    /// Creates an empty table where every lookup yields [`DEFAULT_WEIGHT`].
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Looks up a signal's weight, defaulting to [`DEFAULT_WEIGHT`].
    #[must_use]
    pub fn weight(&self, name: &str) -> u32 {
        self.weights.get(name).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    /// Registers or overrides a signal weight.
    ///
    /// Weights of zero are coerced to [`DEFAULT_WEIGHT`]; the table only
    /// holds positive weights, so registering can never silence a signal.
    pub fn set(&mut self, name: impl Into<String>, weight: u32) {
        self.weights.insert(name.into(), weight.max(DEFAULT_WEIGHT));
    }

    /// Whether the table has an explicit entry for this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.weights.contains_key(name)
    }

    /// Number of explicit entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the table has no explicit entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.weights.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl Default for WeightTable {
    /// The calibrated production weight table.
    ///
    /// Market and situational reads dominate; esoteric signals carry token
    /// weight until validated. The table only grows across releases —
    /// entries are never removed, so historical signal names keep their
    /// calibrated influence.
    fn default() -> Self {
        let mut table = Self::empty();
        for (name, weight) in [
            ("sharp_money", 22),
            ("line_edge", 18),
            ("noosphere_velocity", 17),
            ("injury_vacuum", 16),
            ("game_pace", 15),
            ("travel_fatigue", 14),
            ("back_to_back", 13),
            ("defense_vs_position", 12),
            ("public_fade", 11),
            ("steam_moves", 10),
            ("home_court", 10),
            ("weather", 10),
            ("minutes_projection", 10),
            ("referee", 8),
            ("game_script", 8),
            ("ensemble_ml", 8),
            ("jarvis_trigger", 5),
            ("crush_zone", 4),
            ("nhl_protocol", 4),
            ("gematria", 3),
            ("goldilocks", 3),
            ("moon_phase", 2),
            ("numerology", 2),
            ("sacred_geometry", 2),
            ("zodiac", 1),
        ] {
            table.set(name, weight);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entries() {
        let table = WeightTable::default();
        assert_eq!(table.weight("sharp_money"), 22);
        assert_eq!(table.weight("line_edge"), 18);
        assert_eq!(table.weight("public_fade"), 11);
        assert_eq!(table.weight("zodiac"), 1);
        assert_eq!(table.weight("noosphere_velocity"), 17);
    }

    #[test]
    fn test_missing_name_defaults_to_one() {
        let table = WeightTable::default();
        assert!(!table.contains("totally_unknown_signal"));
        assert_eq!(table.weight("totally_unknown_signal"), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_empty_table() {
        let table = WeightTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.weight("sharp_money"), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_set_and_override() {
        let mut table = WeightTable::empty();
        table.set("insider_leak", 9);
        assert_eq!(table.weight("insider_leak"), 9);
        table.set("insider_leak", 12);
        assert_eq!(table.weight("insider_leak"), 12);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_zero_weight_coerced() {
        let mut table = WeightTable::empty();
        table.set("muted", 0);
        assert_eq!(table.weight("muted"), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_iter_is_name_ordered() {
        let table = WeightTable::default();
        let names: Vec<&str> = table.iter().map(|(n, _)| n).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
