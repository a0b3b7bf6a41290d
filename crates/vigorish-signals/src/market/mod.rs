//! Market signals: reads derived from betting-market data.

mod crush_zone;
mod goldilocks;
mod line_edge;
mod public_fade;
mod sharp_money;

pub use crush_zone::CrushZone;
pub use goldilocks::Goldilocks;
pub use line_edge::LineEdge;
pub use public_fade::PublicFade;
pub use sharp_money::SharpMoney;
