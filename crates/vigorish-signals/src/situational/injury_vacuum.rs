//! Usage vacuum from absent rotation players.

use vigorish_traits::{GameContext, Result, Signal, SignalOutput};

/// Scores the usage vacuum created by ruled-out players.
///
/// Multiple absences reshape rotations enough to move a line; a single
/// absence is a moderate read; questionable tags only are barely above
/// neutral. A clean report is itself mild information (stable rotations),
/// while no report at all is neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct InjuryVacuum;

impl Signal for InjuryVacuum {
    fn name(&self) -> &str {
        "injury_vacuum"
    }

    fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput> {
        if ctx.injuries.is_empty() {
            return Ok(SignalOutput::neutral("No injury data"));
        }

        let game_injuries: Vec<_> = ctx.matchup_injuries().collect();
        if game_injuries.is_empty() {
            return Ok(SignalOutput::new(60.0, "No significant injuries"));
        }

        let absent: Vec<_> = game_injuries
            .iter()
            .filter(|i| i.status.is_absence())
            .collect();

        let output = match absent.len() {
            0 => SignalOutput::new(
                55.0,
                format!("{} players questionable", game_injuries.len()),
            ),
            1 => SignalOutput::new(65.0, format!("Key player OUT: {}", absent[0].player)),
            n => {
                let mut teams: Vec<&str> = absent.iter().map(|i| i.team.as_str()).collect();
                teams.sort_unstable();
                teams.dedup();
                SignalOutput::new(
                    80.0,
                    format!("Multiple OUT: {n} players ({})", teams.join(", ")),
                )
            }
        };

        Ok(output)
    }

    fn required_fields(&self) -> &[&str] {
        &["injuries"]
    }
}
