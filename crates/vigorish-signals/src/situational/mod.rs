//! Situational signals: team circumstance rather than market data.

mod back_to_back;
mod injury_vacuum;
mod travel_fatigue;

pub use back_to_back::BackToBack;
pub use injury_vacuum::InjuryVacuum;
pub use travel_fatigue::TravelFatigue;
