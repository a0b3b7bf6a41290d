//! Simple English gematria over the team names.

use vigorish_traits::{GameContext, Result, Signal, SignalOutput};

/// Ordinal gematria value of a string: A=1 through Z=26, case-insensitive,
/// everything else ignored.
#[must_use]
pub fn gematria_value(text: &str) -> u64 {
    text.bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| u64::from(b.to_ascii_uppercase() - b'A' + 1))
        .sum()
}

/// Compares the gematria values of the two team names.
///
/// A difference divisible by 3 is Tesla alignment and scores 65; anything
/// else is neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gematria;

impl Signal for Gematria {
    fn name(&self) -> &str {
        "gematria"
    }

    fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput> {
        let home = gematria_value(&ctx.home_team);
        let away = gematria_value(&ctx.away_team);
        let diff = home.abs_diff(away);

        let output = if diff % 3 == 0 {
            SignalOutput::new(
                65.0,
                format!("Tesla alignment: {home} vs {away} (diff {diff})"),
            )
        } else {
            SignalOutput::neutral(format!("No alignment: {home} vs {away}"))
        };

        Ok(output)
    }

    fn required_fields(&self) -> &[&str] {
        &["home_team", "away_team"]
    }
}
