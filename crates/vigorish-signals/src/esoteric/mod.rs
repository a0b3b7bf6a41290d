//! Esoteric signals: numerology, astrology, and trigger numbers.
//!
//! These carry the lowest weights in the default table and exist for the
//! dual-score confluence readout more than for the headline confidence.

mod gematria;
mod jarvis;
mod moon;
mod numerology;
mod zodiac;

pub use gematria::{Gematria, gematria_value};
pub use jarvis::{
    ImmortalValidation, JarvisTrigger, TESLA_NUMBERS, TriggerCheck, TriggerInfo, TriggerTier,
    check_trigger, digit_root, digit_sum, trigger_table, validate_immortal,
};
pub use moon::{LUNAR_CYCLE_DAYS, MoonPhase, MoonPhaseSignal, MoonReading, moon_reading};
pub use numerology::{Numerology, life_path};
pub use zodiac::{PlanetaryRuler, Zodiac, ruler_for, ruler_for_weekday};
