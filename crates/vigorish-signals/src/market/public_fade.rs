//! Fading heavy one-sided public action.

use vigorish_traits::{GameContext, Result, Signal, SignalOutput};

/// Scores contrarian value from lopsided public betting.
///
/// The public loses over time, so a heavily bet side is a fade candidate.
/// 80%+ public is a strong fade, 70-79% a moderate one, anything lighter
/// carries no edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicFade;

impl Signal for PublicFade {
    fn name(&self) -> &str {
        "public_fade"
    }

    fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput> {
        let Some(public) = ctx.public_pct else {
            return Ok(SignalOutput::neutral("No public betting data"));
        };

        let output = if public >= 80.0 {
            SignalOutput::new(85.0, format!("HEAVY public: {public:.0}% (strong fade)"))
        } else if public >= 70.0 {
            SignalOutput::new(70.0, format!("Public lean: {public:.0}% (fade spot)"))
        } else {
            SignalOutput::neutral(format!("Balanced action: {public:.0}%"))
        };

        Ok(output)
    }

    fn required_fields(&self) -> &[&str] {
        &["public_pct"]
    }
}
