//! Core foundations for the wreckroom toy.
//!
//! This crate provides the types shared by every other system:
//! - Frame timing and the throttled simulation tick gate
//! - The seeded pseudo-random generator used for decal replay
//! - Cancellable repeat / one-shot timers for held-button actions

pub mod seeded;
pub mod time;
pub mod timer;

pub use seeded::SeededRng;
pub use time::{Millis, TickGate, Time};
pub use timer::{OneShot, Repeating};

// Re-export commonly used types
pub use glam::Vec2;
pub use hecs::{Entity, World};
