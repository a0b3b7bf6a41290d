//! Signal aggregation for the Vigorish confidence engine.
//!
//! This crate blends an open-ended set of independently computed signals
//! into a single confidence number plus categorical labels. It implements
//! the weight-normalized average, the fixed tier and recommendation bands,
//! and the informational confluence check.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use vigorish_combine::{BonusInputs, WeightTable, aggregate};
//! use vigorish_traits::SignalOutput;
//!
//! let mut signals = BTreeMap::new();
//! signals.insert(
//!     "sharp_money".to_string(),
//!     SignalOutput::new(95.0, "STRONG SHARP: 22% divergence"),
//! );
//! signals.insert(
//!     "line_edge".to_string(),
//!     SignalOutput::new(82.0, "Great odds: -104"),
//! );
//!
//! let result = aggregate(&signals, &WeightTable::default(), &BonusInputs::default());
//! assert!(result.confidence >= 80);
//! ```

mod aggregate;
mod confluence;
mod tier;
mod weights;

// Re-export main types
pub use aggregate::{AggregateResult, BonusInputs, RankedSignal, SignalMap, aggregate};
pub use confluence::{ConfluenceLevel, Direction, DirectionalScore, check_confluence};
pub use tier::{Recommendation, Tier};
pub use weights::{DEFAULT_WEIGHT, WeightTable};
