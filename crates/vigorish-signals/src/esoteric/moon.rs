//! Lunar cycle position on game night.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use vigorish_traits::{GameContext, Result, Signal, SignalOutput};

/// Length of the synodic month in days.
pub const LUNAR_CYCLE_DAYS: f64 = 29.53;

/// Reference new moon the cycle is counted from.
fn reference_new_moon() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 11).unwrap_or_default()
}

/// The eight lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    /// Start of the cycle; volatility and underdog energy.
    New,
    /// Growing sliver.
    WaxingCrescent,
    /// First quarter half moon.
    FirstQuarter,
    /// Nearly full and growing.
    WaxingGibbous,
    /// Peak of the cycle; chaos and upsets.
    Full,
    /// Nearly full and shrinking.
    WaningGibbous,
    /// Last quarter half moon.
    LastQuarter,
    /// Shrinking sliver.
    WaningCrescent,
}

impl MoonPhase {
    /// Display name, e.g. `"Full Moon"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a date falls in the lunar cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonReading {
    /// Phase band the date falls in.
    pub phase: MoonPhase,
    /// Days since the last new moon.
    pub age_days: f64,
    /// Position in the cycle, 0-100.
    pub cycle_pct: f64,
}

/// Computes the lunar position of a date.
#[must_use]
pub fn moon_reading(date: NaiveDate) -> MoonReading {
    let days_since = date
        .signed_duration_since(reference_new_moon())
        .num_days() as f64;
    let age_days = days_since.rem_euclid(LUNAR_CYCLE_DAYS);
    let cycle = age_days / LUNAR_CYCLE_DAYS;

    let phase = if cycle < 0.125 {
        MoonPhase::New
    } else if cycle < 0.25 {
        MoonPhase::WaxingCrescent
    } else if cycle < 0.375 {
        MoonPhase::FirstQuarter
    } else if cycle < 0.5 {
        MoonPhase::WaxingGibbous
    } else if cycle < 0.625 {
        MoonPhase::Full
    } else if cycle < 0.75 {
        MoonPhase::WaningGibbous
    } else if cycle < 0.875 {
        MoonPhase::LastQuarter
    } else {
        MoonPhase::WaningCrescent
    };

    MoonReading {
        phase,
        age_days,
        cycle_pct: cycle * 100.0,
    }
}

/// Scores the lunar phase of the game date.
///
/// Full moons bring chaos and upsets (65), new moons underdog energy (60),
/// the quarter moons a slight edge (55). Everything else is neutral, as is
/// a context with no game date.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoonPhaseSignal;

impl Signal for MoonPhaseSignal {
    fn name(&self) -> &str {
        "moon_phase"
    }

    fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput> {
        let Some(date) = ctx.game_date else {
            return Ok(SignalOutput::neutral("No game date"));
        };

        let reading = moon_reading(date);
        let score = match reading.phase {
            MoonPhase::Full => 65.0,
            MoonPhase::New => 60.0,
            MoonPhase::FirstQuarter | MoonPhase::LastQuarter => 55.0,
            _ => 50.0,
        };

        Ok(SignalOutput::new(
            score,
            format!(
                "{} ({:.1} days into cycle)",
                reading.phase, reading.age_days
            ),
        ))
    }

    fn required_fields(&self) -> &[&str] {
        &["game_date"]
    }
}
