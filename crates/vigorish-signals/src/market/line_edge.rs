//! Spread juice as a value read.

use vigorish_traits::{GameContext, Result, Signal, SignalOutput};

/// Scores how good the posted spread price is.
///
/// Reduced juice (better than the standard -110) means the book is offering
/// value; paying extra juice is a tax on the bet regardless of the side.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEdge;

impl Signal for LineEdge {
    fn name(&self) -> &str {
        "line_edge"
    }

    fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput> {
        let Some(odds) = ctx.spread_odds else {
            return Ok(SignalOutput::neutral("No odds data"));
        };

        let output = if odds >= -102 {
            SignalOutput::new(95.0, format!("ELITE odds: {odds} (reduced juice)"))
        } else if odds >= -105 {
            SignalOutput::new(85.0, format!("Great odds: {odds}"))
        } else if odds >= -108 {
            SignalOutput::new(70.0, format!("Good odds: {odds}"))
        } else if odds >= -110 {
            SignalOutput::new(55.0, format!("Standard odds: {odds}"))
        } else {
            SignalOutput::new(40.0, format!("Poor odds: {odds} (paying extra juice)"))
        };

        Ok(output)
    }

    fn required_fields(&self) -> &[&str] {
        &["spread_odds"]
    }
}
