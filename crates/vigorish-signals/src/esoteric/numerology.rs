//! Life-path numerology of the game date.

use chrono::{Datelike, NaiveDate};
use vigorish_traits::{GameContext, Result, Signal, SignalOutput};

/// Master numbers that are never reduced further.
const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

fn digit_sum(mut n: u32) -> u32 {
    let mut total = 0;
    while n > 0 {
        total += n % 10;
        n /= 10;
    }
    total
}

/// Life-path number of a date.
///
/// Sums every digit of year, month, and day, then reduces the total a
/// digit-sum at a time, stopping early on the master numbers 11, 22, 33.
#[must_use]
pub fn life_path(date: NaiveDate) -> u32 {
    let mut n = digit_sum(date.year().unsigned_abs()) + digit_sum(date.month()) + digit_sum(date.day());
    while n > 9 && !MASTER_NUMBERS.contains(&n) {
        n = digit_sum(n);
    }
    n
}

/// Scores the game date's life-path number.
///
/// Power days (life path 8, 11, or 22) score 70; every other day is
/// neutral, as is a context with no date.
#[derive(Debug, Clone, Copy, Default)]
pub struct Numerology;

impl Signal for Numerology {
    fn name(&self) -> &str {
        "numerology"
    }

    fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput> {
        let Some(date) = ctx.game_date else {
            return Ok(SignalOutput::neutral("No game date"));
        };

        let path = life_path(date);
        let output = match path {
            8 | 11 | 22 => SignalOutput::new(70.0, format!("POWER DAY: life path {path}")),
            _ => SignalOutput::neutral(format!("Life path {path}")),
        };

        Ok(output)
    }

    fn required_fields(&self) -> &[&str] {
        &["game_date"]
    }
}
