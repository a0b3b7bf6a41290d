//! Rest-day differential between the two sides.

use vigorish_traits::{GameContext, Result, Signal, SignalOutput};

/// Scores the rest advantage one side holds over the other.
///
/// Three or more extra days of rest is a real scheduling edge; two days is
/// a moderate one; anything less is noise.
#[derive(Debug, Clone, Copy, Default)]
pub struct TravelFatigue;

impl Signal for TravelFatigue {
    fn name(&self) -> &str {
        "travel_fatigue"
    }

    fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput> {
        let (Some(home), Some(away)) = (ctx.home_rest_days, ctx.away_rest_days) else {
            return Ok(SignalOutput::neutral("No rest differential data"));
        };

        let diff = i64::from(home) - i64::from(away);
        let gap = diff.unsigned_abs();

        let output = if gap >= 3 {
            let advantage = if diff > 0 { "HOME" } else { "AWAY" };
            SignalOutput::new(80.0, format!("REST EDGE: {advantage} +{gap} days rest"))
        } else if gap >= 2 {
            SignalOutput::new(65.0, format!("Rest advantage: {gap} days"))
        } else {
            SignalOutput::neutral("No rest differential data")
        };

        Ok(output)
    }

    fn required_fields(&self) -> &[&str] {
        &["home_rest_days", "away_rest_days"]
    }
}
