//! Weapon catalog and the procedural destruction-decal renderer.
//!
//! Every weapon kind turns an impact point into a distinct mark on the
//! raster surface. Patterns are replayable: a decal's own seed drives all
//! of its randomness, so redrawing the scene reproduces it exactly.

pub mod decal;
mod patterns;
pub mod weapon;

pub use decal::{render, rifle_burst, Decal, RIFLE_BURST_COUNT};
pub use weapon::{DecalSize, WeaponKind};
