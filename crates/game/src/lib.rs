//! Wreckroom session wiring: the scene that owns all mutable toy state,
//! the upload → arm → wreck state machine, held-button triggers, the
//! decorative weapon cursor, and the RON config.

pub mod config;
pub mod cursor;
pub mod scene;
pub mod session;
pub mod trigger;

pub use config::WreckConfig;
pub use cursor::{place_cursor, CursorPlacement, CursorStyle, CursorVisual};
pub use scene::{CritterView, FireOutcome, Scene};
pub use session::{Session, Stage};
pub use trigger::{RapidTrigger, TriggerKind};
