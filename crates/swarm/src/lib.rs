//! The critter swarm: a bounded population of wandering entities that can
//! be squashed, plus the short-lived decorations their deaths leave behind.

pub mod critter;
pub mod marks;
pub mod sim;

pub use critter::{Body, CritterBundle, Gait, LifeState, Position, Vitality};
pub use marks::{BloodMark, MarkBoard, MuzzleFlash};
pub use sim::{Bounds, HitCritter, SwarmSystem, CORPSE_HOLD_MS, FADE_MS, HIT_TOLERANCE};
