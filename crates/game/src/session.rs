//! The session: upload → arm → wreck state machine, pointer intent
//! routing, held-button repeats, and the audio cues. One session per view;
//! dropping it tears down the scene and every pending trigger with it.

use std::path::Path;

use engine_core::time::Millis;
use glam::Vec2;
use rand::prelude::*;

use audio::SoundBank;
use decals::WeaponKind;
use input::PointerState;
use raster::TargetImage;

use crate::config::WreckConfig;
use crate::scene::Scene;
use crate::trigger::{RapidTrigger, TriggerKind};

/// Fire cues play louder than the spawn chitter.
const FIRE_VOLUME: f64 = 0.7;
const SPAWN_VOLUME: f64 = 0.5;

/// Where the user is in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Waiting for a target image.
    Upload,
    /// Target ready, picking a weapon.
    ArmSelect,
    /// Wrecking.
    Wreck,
}

pub struct Session {
    stage: Stage,
    config: WreckConfig,
    scene: Option<Scene>,
    weapon: Option<WeaponKind>,
    trigger: Option<RapidTrigger>,
    audio: Option<SoundBank>,
    rng: StdRng,
}

impl Session {
    /// Build a session. Audio is best-effort: when no backend comes up the
    /// toy runs silent rather than failing.
    pub fn new(config: WreckConfig) -> Self {
        let audio = match SoundBank::new() {
            Ok(mut bank) => {
                bank.set_master_volume(config.master_volume);
                for weapon in WeaponKind::ALL {
                    for path in weapon.sound_paths() {
                        if let Err(e) = bank.load_clip(weapon.code(), Path::new(path)) {
                            log::debug!("sound clip {path} unavailable: {e}");
                        }
                    }
                }
                Some(bank)
            }
            Err(e) => {
                log::warn!("audio unavailable, running silent: {e}");
                None
            }
        };
        Self {
            stage: Stage::Upload,
            config,
            scene: None,
            weapon: None,
            trigger: None,
            audio,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn weapon(&self) -> Option<WeaponKind> {
        self.weapon
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn scene_mut(&mut self) -> Option<&mut Scene> {
        self.scene.as_mut()
    }

    // ── Flow transitions ────────────────────────────────────────────────

    /// A decoded target arrived; build the scene around it and move on to
    /// weapon selection.
    pub fn set_target(&mut self, target: TargetImage) {
        self.cancel_trigger();
        self.scene = Some(Scene::new(target, &self.config));
        self.stage = Stage::ArmSelect;
    }

    /// Throw the current target away and start over.
    pub fn change_target(&mut self) {
        self.cancel_trigger();
        self.scene = None;
        self.weapon = None;
        self.stage = Stage::Upload;
    }

    /// Pick (or switch) the weapon. Switching mid-hold stops the repeat.
    pub fn select_weapon(&mut self, weapon: WeaponKind) {
        self.cancel_trigger();
        self.weapon = Some(weapon);
        if self.scene.is_some() {
            self.stage = Stage::Wreck;
        }
    }

    // ── Pointer intents ─────────────────────────────────────────────────

    /// Button went down over the surface: act immediately, and arm the
    /// repeat for weapons that keep going while held.
    pub fn pointer_pressed(&mut self, pos: Vec2, now_ms: Millis) {
        if self.stage != Stage::Wreck {
            return;
        }
        let (Some(scene), Some(weapon)) = (self.scene.as_mut(), self.weapon) else {
            return;
        };
        match TriggerKind::for_weapon(weapon) {
            Some(kind @ TriggerKind::SpawnCritters) => {
                if scene.spawn_critter(pos) {
                    if let Some(bank) = self.audio.as_mut() {
                        bank.play(weapon.code(), SPAWN_VOLUME);
                    }
                }
                self.trigger = Some(RapidTrigger::start(kind, pos, now_ms));
            }
            Some(kind @ TriggerKind::RapidFire) => {
                scene.fire_single(weapon, pos, now_ms);
                if let Some(bank) = self.audio.as_mut() {
                    bank.play(weapon.code(), FIRE_VOLUME);
                }
                self.trigger = Some(RapidTrigger::start(kind, pos, now_ms));
            }
            None => {
                scene.fire(weapon, pos, now_ms);
                if let Some(bank) = self.audio.as_mut() {
                    bank.play(weapon.code(), FIRE_VOLUME);
                }
            }
        }
    }

    /// Pointer moved; a held trigger follows it.
    pub fn pointer_moved(&mut self, pos: Vec2) {
        if let Some(trigger) = self.trigger.as_mut() {
            trigger.update_pos(pos);
        }
    }

    /// Button released: the repeat stops.
    pub fn pointer_released(&mut self) {
        self.cancel_trigger();
    }

    /// Pointer left the surface: same as release.
    pub fn pointer_left(&mut self) {
        self.cancel_trigger();
    }

    /// Route a frame's worth of tracked pointer state into intents.
    pub fn apply_pointer(&mut self, pointer: &PointerState, now_ms: Millis) {
        if let Some(slot) = pointer.weapon_hotkey() {
            self.select_weapon(WeaponKind::ALL[slot]);
        }
        if pointer.is_fire_pressed() {
            self.pointer_pressed(pointer.position(), now_ms);
        } else if pointer.is_fire_held() {
            self.pointer_moved(pointer.position());
        }
        if pointer.is_fire_released() {
            self.pointer_released();
        }
        if pointer.left_this_frame() {
            self.pointer_left();
        }
    }

    // ── Frame driver ────────────────────────────────────────────────────

    /// Advance one host callback: run due trigger repeats, then the gated
    /// simulation tick.
    pub fn frame(&mut self, now_ms: Millis) {
        if self.stage != Stage::Wreck {
            return;
        }
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        if let Some(trigger) = self.trigger.as_mut() {
            let weapon = self.weapon;
            for _ in 0..trigger.due(now_ms) {
                let scatter = trigger.kind().scatter();
                let jitter = Vec2::new(
                    (self.rng.gen::<f32>() - 0.5) * scatter,
                    (self.rng.gen::<f32>() - 0.5) * scatter,
                );
                let pos = trigger.last_pos() + jitter;
                match trigger.kind() {
                    TriggerKind::SpawnCritters => {
                        if scene.spawn_critter(pos) {
                            if let Some(bank) = self.audio.as_mut() {
                                bank.play(WeaponKind::Swarm.code(), SPAWN_VOLUME);
                            }
                        }
                    }
                    TriggerKind::RapidFire => {
                        let weapon = weapon.unwrap_or(WeaponKind::Rifle);
                        scene.fire_single(weapon, pos, now_ms);
                        if let Some(bank) = self.audio.as_mut() {
                            bank.play(weapon.code(), FIRE_VOLUME);
                        }
                    }
                }
            }
        }
        scene.advance(now_ms);
        if let Some(bank) = self.audio.as_mut() {
            bank.cleanup();
        }
    }

    /// Wipe the scene clean (decals, critters, marks) without leaving the
    /// wreck stage.
    pub fn reset(&mut self) {
        self.cancel_trigger();
        if let Some(scene) = self.scene.as_mut() {
            scene.reset();
        }
    }

    fn cancel_trigger(&mut self) {
        if let Some(mut trigger) = self.trigger.take() {
            trigger.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster::Pixel;

    fn target() -> TargetImage {
        TargetImage::from_pixels(32, 32, vec![Pixel::new(180, 180, 180, 255); 32 * 32]).unwrap()
    }

    fn wreck_session(weapon: WeaponKind) -> Session {
        let config = WreckConfig {
            surface_width: 400,
            surface_height: 300,
            ..WreckConfig::default()
        };
        let mut session = Session::new(config);
        session.set_target(target());
        session.select_weapon(weapon);
        session
    }

    #[test]
    fn stage_flow() {
        let mut session = Session::new(WreckConfig::default());
        assert_eq!(session.stage(), Stage::Upload);
        session.set_target(target());
        assert_eq!(session.stage(), Stage::ArmSelect);
        session.select_weapon(WeaponKind::Knife);
        assert_eq!(session.stage(), Stage::Wreck);
        session.change_target();
        assert_eq!(session.stage(), Stage::Upload);
        assert_eq!(session.weapon(), None);
        assert!(session.scene().is_none());
    }

    #[test]
    fn press_before_arming_does_nothing() {
        let mut session = Session::new(WreckConfig::default());
        session.set_target(target());
        session.pointer_pressed(Vec2::new(10.0, 10.0), 0);
        assert_eq!(session.scene().unwrap().hit_count(), 0);
    }

    #[test]
    fn held_swarm_tool_keeps_spawning() {
        let mut session = wreck_session(WeaponKind::Swarm);
        session.pointer_pressed(Vec2::new(200.0, 150.0), 0);
        assert_eq!(session.scene().unwrap().population(), 1);
        session.frame(100);
        assert_eq!(session.scene().unwrap().population(), 2);
        session.frame(350);
        assert_eq!(session.scene().unwrap().population(), 4);

        session.pointer_released();
        session.frame(10_000);
        assert_eq!(session.scene().unwrap().population(), 4);
    }

    #[test]
    fn held_rifle_keeps_firing_single_rounds() {
        let mut session = wreck_session(WeaponKind::Rifle);
        session.pointer_pressed(Vec2::new(200.0, 150.0), 0);
        assert_eq!(session.scene().unwrap().decals().len(), 1);
        session.frame(160);
        assert_eq!(session.scene().unwrap().decals().len(), 3);
    }

    #[test]
    fn pointer_leave_cancels_the_repeat() {
        let mut session = wreck_session(WeaponKind::Swarm);
        session.pointer_pressed(Vec2::new(200.0, 150.0), 0);
        session.pointer_left();
        session.frame(5_000);
        assert_eq!(session.scene().unwrap().population(), 1);
    }

    #[test]
    fn switching_weapons_cancels_the_repeat() {
        let mut session = wreck_session(WeaponKind::Rifle);
        session.pointer_pressed(Vec2::new(100.0, 100.0), 0);
        session.select_weapon(WeaponKind::Knife);
        session.frame(5_000);
        assert_eq!(session.scene().unwrap().decals().len(), 1);
    }

    #[test]
    fn one_shot_weapons_do_not_arm_a_trigger() {
        let mut session = wreck_session(WeaponKind::Hammer);
        session.pointer_pressed(Vec2::new(100.0, 100.0), 0);
        session.frame(5_000);
        assert_eq!(session.scene().unwrap().decals().len(), 1);
        assert_eq!(session.scene().unwrap().hit_count(), 1);
    }

    #[test]
    fn hotkeys_switch_weapons() {
        let mut session = wreck_session(WeaponKind::Pistol);
        let mut pointer = PointerState::new();
        pointer.process_key(input::KeyCode::Digit2, input::ElementState::Pressed);
        session.apply_pointer(&pointer, 0);
        assert_eq!(session.weapon(), Some(WeaponKind::Shotgun));
    }

    #[test]
    fn reset_keeps_the_stage() {
        let mut session = wreck_session(WeaponKind::Pistol);
        session.pointer_pressed(Vec2::new(50.0, 50.0), 0);
        session.reset();
        assert_eq!(session.stage(), Stage::Wreck);
        assert_eq!(session.scene().unwrap().decals().len(), 0);
        assert_eq!(session.scene().unwrap().hit_count(), 0);
    }
}
