//! Money-versus-ticket divergence, the strongest market read.

use vigorish_traits::{GameContext, Result, Signal, SignalOutput};

/// Detects professional action by comparing the share of money against the
/// share of tickets on the heavy side.
///
/// A wide gap means few bets are carrying a lot of money, the classic sharp
/// footprint. Divergence of 20+ points scores 85 plus one point per extra
/// point of gap (capped at 100); 15-19 scores 70 plus the gap; 10-14 scores
/// 55 plus the gap; anything narrower is neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharpMoney;

impl Signal for SharpMoney {
    fn name(&self) -> &str {
        "sharp_money"
    }

    fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput> {
        let (Some(money), Some(tickets)) = (ctx.money_pct, ctx.ticket_pct) else {
            return Ok(SignalOutput::neutral("No sharp data available"));
        };

        let divergence = (money - tickets).abs();
        let sharp_side = if money > tickets { "HOME" } else { "AWAY" };

        let output = if divergence >= 20.0 {
            SignalOutput::new(
                85.0 + (divergence - 20.0).min(15.0),
                format!("STRONG SHARP: {divergence:.0}% divergence on {sharp_side}"),
            )
        } else if divergence >= 15.0 {
            SignalOutput::new(
                70.0 + divergence,
                format!("Sharp detected: {divergence:.0}% money/ticket split"),
            )
        } else if divergence >= 10.0 {
            SignalOutput::new(
                55.0 + divergence,
                format!("Mild sharp lean: {divergence:.0}% divergence"),
            )
        } else {
            SignalOutput::neutral("No significant sharp action")
        };

        Ok(output)
    }

    fn required_fields(&self) -> &[&str] {
        &["money_pct", "ticket_pct"]
    }
}
