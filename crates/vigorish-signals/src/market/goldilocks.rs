//! Spread-magnitude zones: the goldilocks band and the trap gate.

use vigorish_traits::{GameContext, Result, Signal, SignalOutput};

/// Scores the spread's magnitude against historical dog-cover zones.
///
/// Spreads of 4 to 9 points are the goldilocks band where dogs cover most
/// reliably, peaking at 6-7. Under 4 the spread carries no information.
/// Over 15 is trap territory: books know the public loves big favorites.
#[derive(Debug, Clone, Copy, Default)]
pub struct Goldilocks;

impl Signal for Goldilocks {
    fn name(&self) -> &str {
        "goldilocks"
    }

    fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput> {
        let Some(spread) = ctx.spread else {
            return Ok(SignalOutput::neutral("No spread posted"));
        };
        let magnitude = spread.abs();

        let output = if (4.0..=9.0).contains(&magnitude) {
            if (6.0..=7.0).contains(&magnitude) {
                SignalOutput::new(85.0, format!("GOLDILOCKS peak: {magnitude} point spread"))
            } else {
                SignalOutput::new(75.0, format!("Goldilocks zone: {magnitude} point spread"))
            }
        } else if magnitude < 4.0 {
            SignalOutput::new(50.0, format!("Too tight: {magnitude} (coin flip)"))
        } else if magnitude > 15.0 {
            SignalOutput::new(25.0, format!("TRAP GATE: {magnitude} point spread"))
        } else {
            SignalOutput::new(55.0, format!("Moderate spread: {magnitude}"))
        };

        Ok(output)
    }

    fn required_fields(&self) -> &[&str] {
        &["spread"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vigorish_traits::Sport;

    fn ctx(spread: f64) -> GameContext {
        let mut ctx = GameContext::new(Sport::Ncaab, "Duke", "UNC");
        ctx.spread = Some(spread);
        ctx
    }

    #[test]
    fn test_spread_zones() {
        for (spread, expected) in [
            (6.5, 85.0),
            (7.0, 85.0),
            (4.0, 75.0),
            (9.0, 75.0),
            (2.5, 50.0),
            (12.0, 55.0),
            (16.5, 25.0),
        ] {
            let out = Goldilocks.evaluate(&ctx(spread)).unwrap();
            assert_relative_eq!(out.score, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_sign_is_ignored() {
        let favorite = Goldilocks.evaluate(&ctx(-6.5)).unwrap();
        let dog = Goldilocks.evaluate(&ctx(6.5)).unwrap();
        assert_relative_eq!(favorite.score, dog.score);
    }

    #[test]
    fn test_missing_spread_neutral() {
        let ctx = GameContext::new(Sport::Ncaab, "Duke", "UNC");
        let out = Goldilocks.evaluate(&ctx).unwrap();
        assert_relative_eq!(out.score, 50.0);
    }
}
