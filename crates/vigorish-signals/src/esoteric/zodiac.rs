//! Planetary ruler of the weekday.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use vigorish_traits::{GameContext, Result, Signal, SignalOutput};

/// The classical ruler of one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetaryRuler {
    /// Ruling planet.
    pub planet: &'static str,
    /// The energy the day carries for handicapping.
    pub energy: &'static str,
}

/// Classical planetary ruler of a date's weekday.
#[must_use]
pub const fn ruler_for_weekday(weekday: Weekday) -> PlanetaryRuler {
    match weekday {
        Weekday::Mon => PlanetaryRuler {
            planet: "Moon",
            energy: "intuition; trust the gut read",
        },
        Weekday::Tue => PlanetaryRuler {
            planet: "Mars",
            energy: "aggression; favorites close strong",
        },
        Weekday::Wed => PlanetaryRuler {
            planet: "Mercury",
            energy: "speed; pace plays up",
        },
        Weekday::Thu => PlanetaryRuler {
            planet: "Jupiter",
            energy: "expansion; overs and blowouts",
        },
        Weekday::Fri => PlanetaryRuler {
            planet: "Venus",
            energy: "harmony; home sides settle in",
        },
        Weekday::Sat => PlanetaryRuler {
            planet: "Saturn",
            energy: "discipline; unders and grinders",
        },
        Weekday::Sun => PlanetaryRuler {
            planet: "Sun",
            energy: "vitality; stars show up",
        },
    }
}

/// Classical planetary ruler of a date.
#[must_use]
pub fn ruler_for(date: NaiveDate) -> PlanetaryRuler {
    ruler_for_weekday(date.weekday())
}

/// Scores the planetary ruler of the game date.
///
/// Mars and Jupiter days carry a real lean (60), Saturn days a slight one
/// (55); the rest are neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zodiac;

impl Signal for Zodiac {
    fn name(&self) -> &str {
        "zodiac"
    }

    fn evaluate(&self, ctx: &GameContext) -> Result<SignalOutput> {
        let Some(date) = ctx.game_date else {
            return Ok(SignalOutput::neutral("No game date"));
        };

        let ruler = ruler_for(date);
        let score = match ruler.planet {
            "Mars" | "Jupiter" => 60.0,
            "Saturn" => 55.0,
            _ => 50.0,
        };

        Ok(SignalOutput::new(
            score,
            format!("{} day: {}", ruler.planet, ruler.energy),
        ))
    }

    fn required_fields(&self) -> &[&str] {
        &["game_date"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use vigorish_traits::Sport;

    fn ctx_on(y: i32, m: u32, d: u32) -> GameContext {
        let mut ctx = GameContext::new(Sport::Nba, "Lakers", "Celtics");
        ctx.game_date = NaiveDate::from_ymd_opt(y, m, d);
        ctx
    }

    #[test]
    fn test_mars_day() {
        // 2024-01-09 was a Tuesday.
        let out = Zodiac.evaluate(&ctx_on(2024, 1, 9)).unwrap();
        assert_relative_eq!(out.score, 60.0);
        assert!(out.contribution.contains("Mars"));
    }

    #[test]
    fn test_jupiter_day() {
        // 2024-01-11 was a Thursday.
        let out = Zodiac.evaluate(&ctx_on(2024, 1, 11)).unwrap();
        assert_relative_eq!(out.score, 60.0);
    }

    #[test]
    fn test_saturn_day() {
        // 2024-01-13 was a Saturday.
        let out = Zodiac.evaluate(&ctx_on(2024, 1, 13)).unwrap();
        assert_relative_eq!(out.score, 55.0);
    }

    #[test]
    fn test_ordinary_day_neutral() {
        // 2024-01-08 was a Monday.
        let out = Zodiac.evaluate(&ctx_on(2024, 1, 8)).unwrap();
        assert_relative_eq!(out.score, 50.0);
        assert!(out.contribution.contains("Moon"));
    }

    #[test]
    fn test_ruler_table_covers_week() {
        let planets: Vec<&str> = (0..7)
            .filter_map(|d| NaiveDate::from_ymd_opt(2024, 1, 8 + d))
            .map(|date| ruler_for(date).planet)
            .collect();
        assert_eq!(
            planets,
            vec!["Moon", "Mars", "Mercury", "Jupiter", "Venus", "Saturn", "Sun"]
        );
    }
}
