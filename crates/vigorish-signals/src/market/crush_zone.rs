//! The 65% public-on-favorite crush zone.

use vigorish_traits::{GameContext, Result, Signal, SignalOutput};

/// Entry threshold: public share at which the zone opens.
const CRUSH_ZONE_FLOOR: f64 = 65.0;

/// Detects the crush zone: public at 65%+ on the chalk.
///
/// Heavy public money on a favorite moves the line past fair value, so the
/// deeper the public goes the stronger the fade. Public heavy on a dog is a
/// weaker, less reliable read, and a public share at 35% or below is mild
/// contrarian value on the avoided side.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrushZone;

impl Signal for CrushZone {
    fn name(&self) -> &str {
        "crush_zone"
    }

    fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput> {
        let (Some(public), Some(on_favorite)) = (ctx.public_pct, ctx.public_on_favorite) else {
            return Ok(SignalOutput::neutral("No public split data"));
        };

        let output = if public >= CRUSH_ZONE_FLOOR && on_favorite {
            if public >= 80.0 {
                SignalOutput::new(95.0, "MAXIMUM FADE - Public delusion at peak")
            } else if public >= 75.0 {
                SignalOutput::new(85.0, "STRONG FADE - Heavy public chalk")
            } else if public >= 70.0 {
                SignalOutput::new(75.0, "FADE - Solid crush zone entry")
            } else {
                SignalOutput::new(65.0, "FADE - Entering crush zone")
            }
        } else if public >= CRUSH_ZONE_FLOOR {
            SignalOutput::new(45.0, "Monitor - Public dog heavy")
        } else if public <= 35.0 {
            SignalOutput::new(55.0, "Contrarian value - Public avoiding")
        } else {
            SignalOutput::new(30.0, "No clear public edge")
        };

        Ok(output)
    }

    fn required_fields(&self) -> &[&str] {
        &["public_pct", "public_on_favorite"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vigorish_traits::Sport;

    fn ctx(public: f64, on_favorite: bool) -> GameContext {
        let mut ctx = GameContext::new(Sport::Nhl, "Bruins", "Rangers");
        ctx.public_pct = Some(public);
        ctx.public_on_favorite = Some(on_favorite);
        ctx
    }

    #[test]
    fn test_zone_depth_bands() {
        for (public, expected) in [(82.0, 95.0), (76.0, 85.0), (71.0, 75.0), (66.0, 65.0)] {
            let out = CrushZone.evaluate(&ctx(public, true)).unwrap();
            assert_relative_eq!(out.score, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_public_dog_is_weak() {
        let out = CrushZone.evaluate(&ctx(70.0, false)).unwrap();
        assert_relative_eq!(out.score, 45.0);
    }

    #[test]
    fn test_public_avoiding_is_contrarian() {
        let out = CrushZone.evaluate(&ctx(30.0, true)).unwrap();
        assert_relative_eq!(out.score, 55.0);
    }

    #[test]
    fn test_middle_ground_scores_low() {
        let out = CrushZone.evaluate(&ctx(50.0, true)).unwrap();
        assert_relative_eq!(out.score, 30.0);
    }

    #[test]
    fn test_missing_favorite_flag_neutral() {
        let mut ctx = GameContext::new(Sport::Nhl, "Bruins", "Rangers");
        ctx.public_pct = Some(80.0);
        let out = CrushZone.evaluate(&ctx).unwrap();
        assert_relative_eq!(out.score, 50.0);
    }
}
