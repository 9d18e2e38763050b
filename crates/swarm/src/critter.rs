//! Critter components.

use engine_core::time::Millis;
use glam::Vec2;

/// Position on the play surface, in pixels.
#[derive(Debug, Clone, Copy)]
pub struct Position(pub Vec2);

/// Wandering gait: heading in radians, distance covered per tick.
#[derive(Debug, Clone, Copy)]
pub struct Gait {
    pub heading: f32,
    pub speed: f32,
}

/// Body size in pixels; also the hit-test radius.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub size: f32,
}

/// Lifecycle state. Opacity is 1 while alive, then decays once dead until
/// the entity is removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vitality {
    pub state: LifeState,
    pub opacity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Alive,
    Dead { since_ms: Millis },
}

impl Vitality {
    pub fn alive() -> Self {
        Self {
            state: LifeState::Alive,
            opacity: 1.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state == LifeState::Alive
    }

    /// Mark dead at `now_ms`. Returns false when already dead.
    pub fn kill(&mut self, now_ms: Millis) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.state = LifeState::Dead { since_ms: now_ms };
        true
    }
}

/// Bundle of components for spawning a critter.
pub struct CritterBundle {
    pub position: Position,
    pub gait: Gait,
    pub body: Body,
    pub vitality: Vitality,
}

impl CritterBundle {
    /// Spawn into the entity world.
    pub fn spawn(self, world: &mut hecs::World) -> hecs::Entity {
        world.spawn((self.position, self.gait, self.body, self.vitality))
    }
}
