//! Common types used throughout the Vigorish engine.
//!
//! This module defines the per-game request context that leaf signals read
//! their inputs from, along with the sport and injury-report types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported sports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sport {
    /// National Basketball Association.
    Nba,
    /// National Football League.
    Nfl,
    /// Major League Baseball.
    Mlb,
    /// National Hockey League.
    Nhl,
    /// NCAA men's basketball.
    Ncaab,
}

impl Sport {
    /// Short display code, e.g. `"NBA"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nba => "NBA",
            Self::Nfl => "NFL",
            Self::Mlb => "MLB",
            Self::Nhl => "NHL",
            Self::Ncaab => "NCAAB",
        }
    }

    /// Sport key used by The Odds API.
    #[must_use]
    pub const fn odds_api_key(&self) -> &'static str {
        match self {
            Self::Nba => "basketball_nba",
            Self::Nfl => "americanfootball_nfl",
            Self::Mlb => "baseball_mlb",
            Self::Nhl => "icehockey_nhl",
            Self::Ncaab => "basketball_ncaab",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = crate::EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NBA" => Ok(Self::Nba),
            "NFL" => Ok(Self::Nfl),
            "MLB" => Ok(Self::Mlb),
            "NHL" => Ok(Self::Nhl),
            "NCAAB" => Ok(Self::Ncaab),
            other => Err(crate::EngineError::Other(format!(
                "Unknown sport: {other}. Use NBA, NFL, MLB, NHL, or NCAAB."
            ))),
        }
    }
}

/// Player availability status from an injury report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InjuryStatus {
    /// Ruled out.
    Out,
    /// Unlikely to play.
    Doubtful,
    /// Game-time decision.
    Questionable,
    /// Expected to play.
    Probable,
}

impl InjuryStatus {
    /// Whether the player is expected to miss the game.
    #[must_use]
    pub const fn is_absence(&self) -> bool {
        matches!(self, Self::Out | Self::Doubtful)
    }
}

/// A single line from an injury report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryReport {
    /// Team the player belongs to.
    pub team: String,
    /// Player name.
    pub player: String,
    /// Availability status.
    pub status: InjuryStatus,
}

/// Raw inputs for one aggregation call.
///
/// A `GameContext` is assembled fresh per request from whatever data the
/// caller has available. Every field a leaf signal might read is optional
/// except the matchup itself; signals score a neutral 50 when their inputs
/// are absent rather than failing.
///
/// # Example
///
/// ```
/// use vigorish_traits::{GameContext, Sport};
///
/// let mut ctx = GameContext::new(Sport::Nba, "Lakers", "Celtics");
/// ctx.spread = Some(-4.5);
/// ctx.public_pct = Some(72.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameContext {
    /// Sport the game belongs to.
    pub sport: Sport,
    /// Home team name.
    pub home_team: String,
    /// Away team name.
    pub away_team: String,
    /// Scheduled game date, if known.
    pub game_date: Option<NaiveDate>,
    /// Point spread from the home team's perspective (positive = home dog).
    pub spread: Option<f64>,
    /// American odds attached to the spread.
    pub spread_odds: Option<i32>,
    /// Game total (over/under line).
    pub total: Option<f64>,
    /// Share of public bets on the heavier side, 0-100.
    pub public_pct: Option<f64>,
    /// Whether the public's heavy side is the favorite.
    pub public_on_favorite: Option<bool>,
    /// Share of money on the heavier side, 0-100.
    pub money_pct: Option<f64>,
    /// Share of tickets on the heavier side, 0-100.
    pub ticket_pct: Option<f64>,
    /// Days of rest for the home team.
    pub home_rest_days: Option<u32>,
    /// Days of rest for the away team.
    pub away_rest_days: Option<u32>,
    /// Injury report lines for either team.
    pub injuries: Vec<InjuryReport>,
    /// External research model score on a 0-10 scale, if supplied.
    pub research_score: Option<f64>,
}

impl GameContext {
    /// Creates a context for a matchup with every optional input unset.
    pub fn new(sport: Sport, home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self {
            sport,
            home_team: home_team.into(),
            away_team: away_team.into(),
            game_date: None,
            spread: None,
            spread_odds: None,
            total: None,
            public_pct: None,
            public_on_favorite: None,
            money_pct: None,
            ticket_pct: None,
            home_rest_days: None,
            away_rest_days: None,
            injuries: Vec::new(),
            research_score: None,
        }
    }

    /// Whether any market data (spread with odds) is attached.
    ///
    /// The aggregator applies its fixed odds bonus when this is true.
    #[must_use]
    pub const fn has_market_odds(&self) -> bool {
        self.spread.is_some() && self.spread_odds.is_some()
    }

    /// Injury lines for the two teams in this matchup.
    pub fn matchup_injuries(&self) -> impl Iterator<Item = &InjuryReport> {
        self.injuries
            .iter()
            .filter(|i| i.team == self.home_team || i.team == self.away_team)
    }
}
