//! Zero-rest scheduling spots.

use vigorish_traits::{GameContext, Result, Signal, SignalOutput};

/// Flags teams playing on zero days of rest.
///
/// One side on a back-to-back while the other is rested is a playable
/// fatigue edge. Both sides on zero rest washes most of the edge out but
/// still tilts toward sloppier, lower-scoring play.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackToBack;

impl Signal for BackToBack {
    fn name(&self) -> &str {
        "back_to_back"
    }

    fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput> {
        let (Some(home), Some(away)) = (ctx.home_rest_days, ctx.away_rest_days) else {
            return Ok(SignalOutput::neutral("No schedule data"));
        };

        let output = match (home, away) {
            (0, 0) => SignalOutput::new(55.0, "Both sides on a back-to-back"),
            (0, _) => SignalOutput::new(75.0, format!("{} on a back-to-back", ctx.home_team)),
            (_, 0) => SignalOutput::new(75.0, format!("{} on a back-to-back", ctx.away_team)),
            _ => SignalOutput::neutral("Neither side on a back-to-back"),
        };

        Ok(output)
    }

    fn required_fields(&self) -> &[&str] {
        &["home_rest_days", "away_rest_days"]
    }
}
