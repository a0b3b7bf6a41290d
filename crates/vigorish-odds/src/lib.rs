//! The Odds API client for Vigorish.
//!
//! This crate provides a thin client for fetching live odds boards from
//! [The Odds API](https://the-odds-api.com/). It is a pass-through: no
//! retries, no caching, no pagination. Callers treat a failed fetch as an
//! empty slate.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vigorish_odds::OddsClient;
//! use vigorish_traits::Sport;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OddsClient::from_env()?;
//!     let events = client.odds(Sport::Nba, "spreads,totals").await?;
//!     for event in events {
//!         println!("{} @ {}", event.away_team, event.home_team);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `ODDS_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! ODDS_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod types;

pub use client::OddsClient;
pub use error::OddsError;
pub use types::{Bookmaker, Market, OddsEvent, Outcome, SportInfo};

/// Result type for odds feed operations.
pub type Result<T> = std::result::Result<T, OddsError>;
