//! Swarm simulation: bounded spawning, the wander tick, wall reflection,
//! and the death → fade → removal lifecycle.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use engine_core::time::Millis;
use glam::Vec2;
use hecs::{Entity, World};
use rand::prelude::*;

use crate::critter::{Body, CritterBundle, Gait, LifeState, Position, Vitality};

/// Critters steer away from this band near each surface edge.
pub const EDGE_MARGIN: f32 = 20.0;
/// Extra hit-test slack beyond the critter's own size.
pub const HIT_TOLERANCE: f32 = 20.0;
/// A corpse stays fully opaque this long after death.
pub const CORPSE_HOLD_MS: u64 = 1500;
/// Then fades linearly to zero over this long.
pub const FADE_MS: u64 = 1000;

/// The walkable rectangle, in surface pixels.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            margin: EDGE_MARGIN,
        }
    }
}

/// A living critter matched by a hit test.
#[derive(Debug, Clone, Copy)]
pub struct HitCritter {
    pub entity: Entity,
    pub pos: Vec2,
    pub size: f32,
}

/// Drives the critter population. Spawning is bounded; requests past the
/// cap are silently dropped.
pub struct SwarmSystem {
    max_critters: usize,
    rng: StdRng,
}

impl SwarmSystem {
    pub fn new(max_critters: usize) -> Self {
        Self {
            max_critters,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for tests and scripted demos.
    pub fn seeded(max_critters: usize, seed: u64) -> Self {
        Self {
            max_critters,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn max_critters(&self) -> usize {
        self.max_critters
    }

    /// Current population, dead-but-fading included.
    pub fn population(world: &World) -> usize {
        world.query::<&Vitality>().iter().count()
    }

    /// Spawn one critter at `pos` with a random gait. No-op at the cap.
    pub fn spawn(&mut self, world: &mut World, pos: Vec2) -> Option<Entity> {
        if Self::population(world) >= self.max_critters {
            log::trace!("critter spawn dropped, population at cap {}", self.max_critters);
            return None;
        }
        let bundle = CritterBundle {
            position: Position(pos),
            gait: Gait {
                heading: self.rng.gen::<f32>() * TAU,
                speed: 1.0 + self.rng.gen::<f32>() * 2.0,
            },
            body: Body {
                size: 25.0 + self.rng.gen::<f32>() * 15.0,
            },
            vitality: Vitality::alive(),
        };
        Some(bundle.spawn(world))
    }

    /// One simulation tick: living critters wander and reflect off the edge
    /// margin; dead ones fade and are removed once fully transparent.
    pub fn tick(&mut self, world: &mut World, bounds: Bounds, now_ms: Millis) {
        let mut faded_out = Vec::new();
        for (entity, (pos, gait, vit)) in
            world.query_mut::<(&mut Position, &mut Gait, &mut Vitality)>()
        {
            match vit.state {
                LifeState::Dead { since_ms } => {
                    vit.opacity = fade_opacity(since_ms, now_ms);
                    if vit.opacity <= 0.0 {
                        faded_out.push(entity);
                    }
                }
                LifeState::Alive => {
                    // Occasional course change, up to ±45°.
                    if self.rng.gen::<f32>() < 0.1 {
                        gait.heading += (self.rng.gen::<f32>() - 0.5) * FRAC_PI_2;
                    }
                    let mut next = pos.0 + Vec2::from_angle(gait.heading) * gait.speed;
                    // Reflect off walls rather than bounce: mirror the
                    // heading component and clamp back into bounds.
                    if next.x < bounds.margin || next.x > bounds.width - bounds.margin {
                        gait.heading = PI - gait.heading;
                        next.x = next.x.clamp(bounds.margin, bounds.width - bounds.margin);
                    }
                    if next.y < bounds.margin || next.y > bounds.height - bounds.margin {
                        gait.heading = -gait.heading;
                        next.y = next.y.clamp(bounds.margin, bounds.height - bounds.margin);
                    }
                    pos.0 = next;
                }
            }
        }
        for entity in faded_out {
            world.despawn(entity).ok();
        }
    }

    /// Find the living critter a hit at `point` lands on, if any: within
    /// `size + HIT_TOLERANCE` of its center, nearest center winning when
    /// several overlap.
    pub fn hit_test(world: &World, point: Vec2) -> Option<HitCritter> {
        world
            .query::<(&Position, &Body, &Vitality)>()
            .iter()
            .filter(|(_, (_, _, vit))| vit.is_alive())
            .filter_map(|(entity, (pos, body, _))| {
                let dist = pos.0.distance(point);
                (dist < body.size + HIT_TOLERANCE).then_some((
                    HitCritter {
                        entity,
                        pos: pos.0,
                        size: body.size,
                    },
                    dist,
                ))
            })
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(hit, _)| hit)
    }

    /// Kill a living critter at `now_ms`. Returns false if it was already
    /// dead or despawned.
    pub fn kill(world: &mut World, entity: Entity, now_ms: Millis) -> bool {
        match world.get::<&mut Vitality>(entity) {
            Ok(mut vit) => vit.kill(now_ms),
            Err(_) => false,
        }
    }
}

/// Corpse opacity at `now_ms`: opaque through the hold window, then a
/// linear fade to zero. Monotone non-increasing in `now_ms`.
fn fade_opacity(since_ms: Millis, now_ms: Millis) -> f32 {
    let elapsed = now_ms.saturating_sub(since_ms);
    if elapsed < CORPSE_HOLD_MS {
        1.0
    } else if elapsed < CORPSE_HOLD_MS + FADE_MS {
        1.0 - (elapsed - CORPSE_HOLD_MS) as f32 / FADE_MS as f32
    } else {
        0.0
    }
}
