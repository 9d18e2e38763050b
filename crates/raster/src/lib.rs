//! Persistent CPU raster surface and software drawing primitives.
//!
//! Decals are painted here and stay until the scene resets; the host reads
//! the pixel buffer back for presentation however it likes.

pub mod draw;
pub mod surface;
pub mod target;

pub use surface::{Pixel, Surface};
pub use target::{TargetError, TargetImage};
