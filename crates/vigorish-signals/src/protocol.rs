//! Sport-specific condition stacks.

use vigorish_traits::{GameContext, Result, Signal, SignalOutput, Sport};

/// Research-score floor for the protocol.
const RESEARCH_FLOOR: f64 = 9.3;

/// Public share that marks the fade opportunity.
const PUBLIC_FLOOR: f64 = 65.0;

/// The NHL dog protocol: a three-condition stack for puck-line dogs.
///
/// Conditions: the side is a puck-line dog (+1.5), the research score is
/// 9.3 or better, and the public is 65%+ on the favorite. All three met is
/// the full protocol (92); two is partial (70); one is weak (45); none is
/// a hard no (20). Non-NHL contexts are neutral, as is an NHL context with
/// none of the three inputs supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NhlDogProtocol;

impl Signal for NhlDogProtocol {
    fn name(&self) -> &str {
        "nhl_protocol"
    }

    fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput> {
        if ctx.sport != Sport::Nhl {
            return Ok(SignalOutput::neutral("Protocol only applies to NHL"));
        }
        if ctx.spread.is_none() && ctx.research_score.is_none() && ctx.public_pct.is_none() {
            return Ok(SignalOutput::neutral("No protocol inputs"));
        }

        let mut met = Vec::new();
        let mut failed = Vec::new();

        match ctx.spread {
            Some(s) if s > 0.0 && s.abs() == 1.5 => met.push("puck-line dog (+1.5)"),
            _ => failed.push("not a puck-line dog"),
        }
        match ctx.research_score {
            Some(r) if r >= RESEARCH_FLOOR => met.push("research score over 9.3"),
            _ => failed.push("research score under 9.3"),
        }
        match ctx.public_pct {
            Some(p) if p >= PUBLIC_FLOOR => met.push("public 65%+ (fade opportunity)"),
            _ => failed.push("public under 65%"),
        }

        let (score, label) = match met.len() {
            3 => (92.0, "FULL PROTOCOL"),
            2 => (70.0, "PARTIAL PROTOCOL"),
            1 => (45.0, "WEAK SIGNAL"),
            _ => (20.0, "NO PROTOCOL"),
        };

        let detail = if met.is_empty() {
            failed.join(", ")
        } else {
            met.join(", ")
        };

        Ok(SignalOutput::new(score, format!("{label}: {detail}")))
    }

    fn required_fields(&self) -> &[&str] {
        &["sport", "spread", "research_score", "public_pct"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn nhl_ctx() -> GameContext {
        GameContext::new(Sport::Nhl, "Bruins", "Rangers")
    }

    #[test]
    fn test_full_protocol() {
        let mut ctx = nhl_ctx();
        ctx.spread = Some(1.5);
        ctx.research_score = Some(9.5);
        ctx.public_pct = Some(70.0);
        let out = NhlDogProtocol.evaluate(&ctx).unwrap();
        assert_relative_eq!(out.score, 92.0);
        assert!(out.contribution.contains("FULL PROTOCOL"));
    }

    #[test]
    fn test_partial_protocol() {
        let mut ctx = nhl_ctx();
        ctx.spread = Some(1.5);
        ctx.research_score = Some(9.4);
        ctx.public_pct = Some(50.0);
        let out = NhlDogProtocol.evaluate(&ctx).unwrap();
        assert_relative_eq!(out.score, 70.0);
    }

    #[test]
    fn test_favorite_fails_spread_condition() {
        // -1.5 is the puck-line favorite, not the dog.
        let mut ctx = nhl_ctx();
        ctx.spread = Some(-1.5);
        ctx.research_score = Some(9.5);
        ctx.public_pct = Some(70.0);
        let out = NhlDogProtocol.evaluate(&ctx).unwrap();
        assert_relative_eq!(out.score, 70.0);
    }

    #[test]
    fn test_single_condition_weak() {
        let mut ctx = nhl_ctx();
        ctx.public_pct = Some(70.0);
        let out = NhlDogProtocol.evaluate(&ctx).unwrap();
        assert_relative_eq!(out.score, 45.0);
    }

    #[test]
    fn test_all_conditions_failed() {
        let mut ctx = nhl_ctx();
        ctx.spread = Some(2.5);
        ctx.research_score = Some(5.0);
        ctx.public_pct = Some(40.0);
        let out = NhlDogProtocol.evaluate(&ctx).unwrap();
        assert_relative_eq!(out.score, 20.0);
        assert!(out.contribution.contains("NO PROTOCOL"));
    }

    #[test]
    fn test_non_nhl_neutral() {
        let mut ctx = GameContext::new(Sport::Nba, "Lakers", "Celtics");
        ctx.spread = Some(1.5);
        ctx.research_score = Some(9.9);
        ctx.public_pct = Some(80.0);
        let out = NhlDogProtocol.evaluate(&ctx).unwrap();
        assert_relative_eq!(out.score, 50.0);
    }

    #[test]
    fn test_no_inputs_neutral() {
        let out = NhlDogProtocol.evaluate(&nhl_ctx()).unwrap();
        assert_relative_eq!(out.score, 50.0);
    }
}
