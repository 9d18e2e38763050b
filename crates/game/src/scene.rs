//! The scene: single owner of every piece of mutable toy state — the
//! raster surface, the append-only decal log, the critter world, and the
//! ephemeral marks. All mutation funnels through here on the main callback
//! chain, so teardown (dropping the scene) cannot leave anything running.

use engine_core::time::Millis;
use engine_core::{OneShot, TickGate};
use glam::Vec2;
use hecs::{Entity, World};
use rand::prelude::*;

use decals::{render, rifle_burst, Decal, WeaponKind, RIFLE_BURST_COUNT};
use raster::{Surface, TargetImage};
use swarm::{Body, Bounds, Gait, MarkBoard, Position, SwarmSystem, Vitality};

use crate::config::WreckConfig;

/// Brightness pulse length after a gun shot, in milliseconds.
const GUN_PULSE_MS: u64 = 50;

/// What a fire event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    /// A living critter absorbed the hit: it dies, blood is marked, and no
    /// decal is drawn.
    Squashed(Entity),
    /// The backdrop took the hit; this many decals were appended.
    Marked(u32),
}

/// Snapshot of one critter for the presentation layer.
#[derive(Debug, Clone, Copy)]
pub struct CritterView {
    pub entity: Entity,
    pub pos: Vec2,
    pub heading: f32,
    pub size: f32,
    pub alive: bool,
    pub opacity: f32,
}

pub struct Scene {
    surface: Surface,
    target: TargetImage,
    decals: Vec<Decal>,
    world: World,
    swarm: SwarmSystem,
    marks: MarkBoard,
    gate: TickGate,
    bounds: Bounds,
    hit_count: u64,
    pulse: Option<OneShot>,
    rng: StdRng,
}

impl Scene {
    pub fn new(target: TargetImage, config: &WreckConfig) -> Self {
        let mut bounds = Bounds::new(config.surface_width as f32, config.surface_height as f32);
        bounds.margin = config.edge_margin;
        let mut scene = Self {
            surface: Surface::new(config.surface_width, config.surface_height),
            target,
            decals: Vec::new(),
            world: World::new(),
            swarm: SwarmSystem::new(config.max_critters),
            marks: MarkBoard::new(config.max_blood_marks),
            gate: TickGate::new(config.tick_interval_ms),
            bounds,
            hit_count: 0,
            pulse: None,
            rng: StdRng::from_entropy(),
        };
        scene.redraw_all();
        scene
    }

    // ── Firing ──────────────────────────────────────────────────────────

    /// The click path. The rifle empties a 5-round burst; everything else
    /// lands a single mark. A living critter under the point absorbs the
    /// hit instead.
    pub fn fire(&mut self, weapon: WeaponKind, at: Vec2, now_ms: Millis) -> FireOutcome {
        if let Some(outcome) = self.try_squash(weapon, at, now_ms) {
            return outcome;
        }
        let size = weapon.decal_size().sample(&mut self.rng);
        let seed = now_ms as u32;
        let added = if weapon == WeaponKind::Rifle {
            let burst = rifle_burst(at, size, seed);
            for decal in &burst {
                render(&mut self.surface, decal);
            }
            self.decals.extend(burst);
            RIFLE_BURST_COUNT
        } else {
            self.append_decal(Decal::new(at, size, weapon, seed));
            1
        };
        self.after_impact(weapon, at, now_ms, added)
    }

    /// The rapid path: exactly one round per invocation, rifle included.
    pub fn fire_single(&mut self, weapon: WeaponKind, at: Vec2, now_ms: Millis) -> FireOutcome {
        if let Some(outcome) = self.try_squash(weapon, at, now_ms) {
            return outcome;
        }
        let size = weapon.decal_size().sample(&mut self.rng);
        self.append_decal(Decal::new(at, size, weapon, now_ms as u32));
        self.after_impact(weapon, at, now_ms, 1)
    }

    fn try_squash(&mut self, weapon: WeaponKind, at: Vec2, now_ms: Millis) -> Option<FireOutcome> {
        let hit = SwarmSystem::hit_test(&self.world, at)?;
        SwarmSystem::kill(&mut self.world, hit.entity, now_ms);
        self.marks.add_blood(at, hit.size, now_ms);
        self.hit_count += 1;
        self.gun_feedback(weapon, at, now_ms);
        Some(FireOutcome::Squashed(hit.entity))
    }

    fn after_impact(
        &mut self,
        weapon: WeaponKind,
        at: Vec2,
        now_ms: Millis,
        added: u32,
    ) -> FireOutcome {
        self.hit_count += added as u64;
        self.gun_feedback(weapon, at, now_ms);
        FireOutcome::Marked(added)
    }

    fn gun_feedback(&mut self, weapon: WeaponKind, at: Vec2, now_ms: Millis) {
        if weapon.is_gun() {
            self.marks.add_flash(at, now_ms);
            self.pulse = Some(OneShot::after(GUN_PULSE_MS, now_ms));
        }
    }

    fn append_decal(&mut self, decal: Decal) {
        render(&mut self.surface, &decal);
        self.decals.push(decal);
    }

    // ── Critters ────────────────────────────────────────────────────────

    /// Spawn one critter. Silently dropped at the population cap.
    pub fn spawn_critter(&mut self, at: Vec2) -> bool {
        self.swarm.spawn(&mut self.world, at).is_some()
    }

    // ── Frame advancement ───────────────────────────────────────────────

    /// Per-callback advancement. The simulation body runs only when the
    /// tick gate opens (~60 Hz); the cheap pulse bookkeeping always runs.
    /// Returns whether a tick applied.
    pub fn advance(&mut self, now_ms: Millis) -> bool {
        if let Some(pulse) = self.pulse.as_mut() {
            if pulse.due(now_ms) {
                self.pulse = None;
            }
        }
        if !self.gate.try_tick(now_ms) {
            return false;
        }
        self.swarm.tick(&mut self.world, self.bounds, now_ms);
        self.marks.prune(now_ms);
        true
    }

    // ── Invalidation ────────────────────────────────────────────────────

    /// Replay the whole scene onto a fresh raster: target image, then every
    /// decal in firing order. Seeds make the replay pixel-identical.
    pub fn redraw_all(&mut self) {
        self.surface.clear(raster::Pixel::TRANSPARENT);
        self.target.blit_fit(&mut self.surface);
        for decal in &self.decals {
            render(&mut self.surface, decal);
        }
    }

    /// Resize the surface (host window changed) and replay.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface = Surface::new(width, height);
        self.bounds.width = width as f32;
        self.bounds.height = height as f32;
        self.redraw_all();
    }

    /// Atomically wipe decals, critters, marks, and the counter, then
    /// paint the bare target again.
    pub fn reset(&mut self) {
        self.decals.clear();
        self.world.clear();
        self.marks.clear();
        self.hit_count = 0;
        self.pulse = None;
        self.redraw_all();
    }

    /// Swap in a different target image and start clean.
    pub fn set_target(&mut self, target: TargetImage) {
        self.target = target;
        self.reset();
    }

    // ── Read access for the presentation layer ──────────────────────────

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn decals(&self) -> &[Decal] {
        &self.decals
    }

    pub fn marks(&self) -> &MarkBoard {
        &self.marks
    }

    pub fn hit_count(&self) -> u64 {
        self.hit_count
    }

    pub fn population(&self) -> usize {
        SwarmSystem::population(&self.world)
    }

    /// True while the post-shot brightness pulse is active.
    pub fn flash_active(&self) -> bool {
        self.pulse.is_some()
    }

    /// Publish a per-frame snapshot of the critters for rendering.
    pub fn critters(&self) -> Vec<CritterView> {
        self.world
            .query::<(&Position, &Gait, &Body, &Vitality)>()
            .iter()
            .map(|(entity, (pos, gait, body, vit))| CritterView {
                entity,
                pos: pos.0,
                heading: gait.heading,
                size: body.size,
                alive: vit.is_alive(),
                opacity: vit.opacity,
            })
            .collect()
    }
}
