//! Response types for The Odds API v4.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sport available on the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportInfo {
    /// Feed key, e.g. `"basketball_nba"`.
    pub key: String,
    /// Sport group, e.g. `"Basketball"`.
    pub group: String,
    /// Display title.
    pub title: String,
    /// Feed-supplied description.
    #[serde(default)]
    pub description: String,
    /// Whether the sport is in season.
    pub active: bool,
    /// Whether outright (futures) markets exist.
    #[serde(default)]
    pub has_outrights: bool,
}

/// One priced outcome within a market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Team name, or `"Over"`/`"Under"` for totals.
    pub name: String,
    /// American odds for this outcome.
    pub price: f64,
    /// The line (spread or total) the price applies to.
    #[serde(default)]
    pub point: Option<f64>,
}

/// One market (spreads, totals, h2h) from one bookmaker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    /// Market key, e.g. `"spreads"`.
    pub key: String,
    /// Priced outcomes.
    pub outcomes: Vec<Outcome>,
}

/// One bookmaker's markets for an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmaker {
    /// Bookmaker key, e.g. `"draftkings"`.
    pub key: String,
    /// Display title.
    pub title: String,
    /// When this book last updated its prices.
    pub last_update: DateTime<Utc>,
    /// Markets offered.
    pub markets: Vec<Market>,
}

/// One event on the odds board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsEvent {
    /// Feed event id.
    pub id: String,
    /// Sport key the event belongs to.
    pub sport_key: String,
    /// Scheduled start time.
    pub commence_time: DateTime<Utc>,
    /// Home team name.
    pub home_team: String,
    /// Away team name.
    pub away_team: String,
    /// Books carrying this event.
    pub bookmakers: Vec<Bookmaker>,
}

impl OddsEvent {
    /// Home-side spread and price from the first book carrying a spreads
    /// market.
    ///
    /// Books agree within a half point almost always, so the first listing
    /// serves as consensus for feeding a game context.
    #[must_use]
    pub fn home_spread(&self) -> Option<(f64, i32)> {
        self.bookmakers.iter().find_map(|book| {
            let market = book.markets.iter().find(|m| m.key == "spreads")?;
            let outcome = market.outcomes.iter().find(|o| o.name == self.home_team)?;
            Some((outcome.point?, outcome.price.round() as i32))
        })
    }

    /// Total line from the first book carrying a totals market.
    #[must_use]
    pub fn total_line(&self) -> Option<f64> {
        self.bookmakers.iter().find_map(|book| {
            let market = book.markets.iter().find(|m| m.key == "totals")?;
            market.outcomes.first().and_then(|o| o.point)
        })
    }
}
