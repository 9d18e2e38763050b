//! Held-button triggers: continuous critter spawning and rapid rifle fire.
//!
//! A trigger is an explicit scheduled task. It lives in the session's
//! single trigger slot; release, pointer-leave, or scene teardown cancels
//! it, so no repeat can outlive the thing it mutates.

use engine_core::time::Millis;
use engine_core::Repeating;
use glam::Vec2;

use decals::WeaponKind;

/// Critter drops repeat at this interval while held.
pub const SPAWN_INTERVAL_MS: u64 = 100;
/// Rifle rounds repeat at this interval while held.
pub const RAPID_FIRE_INTERVAL_MS: u64 = 80;
/// Full span of the random scatter applied to repeated spawns (± half).
pub const SPAWN_SCATTER: f32 = 30.0;
/// Full span of the recoil offset applied to repeated rifle rounds.
pub const RECOIL_SCATTER: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    SpawnCritters,
    RapidFire,
}

impl TriggerKind {
    /// Which weapons keep acting while the button is held.
    pub fn for_weapon(weapon: WeaponKind) -> Option<TriggerKind> {
        match weapon {
            WeaponKind::Swarm => Some(TriggerKind::SpawnCritters),
            WeaponKind::Rifle => Some(TriggerKind::RapidFire),
            _ => None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        match self {
            TriggerKind::SpawnCritters => SPAWN_INTERVAL_MS,
            TriggerKind::RapidFire => RAPID_FIRE_INTERVAL_MS,
        }
    }

    /// Full scatter span for repeat positions.
    pub fn scatter(&self) -> f32 {
        match self {
            TriggerKind::SpawnCritters => SPAWN_SCATTER,
            TriggerKind::RapidFire => RECOIL_SCATTER,
        }
    }
}

/// An armed held-button trigger. The immediate first action happens at
/// arm time (by the caller); repeats follow the timer at the last known
/// pointer position.
#[derive(Debug)]
pub struct RapidTrigger {
    kind: TriggerKind,
    timer: Repeating,
    last_pos: Vec2,
}

impl RapidTrigger {
    pub fn start(kind: TriggerKind, pos: Vec2, now_ms: Millis) -> Self {
        Self {
            kind,
            timer: Repeating::arm(kind.interval_ms(), now_ms),
            last_pos: pos,
        }
    }

    pub fn kind(&self) -> TriggerKind {
        self.kind
    }

    /// Track the pointer while held; repeats land here.
    pub fn update_pos(&mut self, pos: Vec2) {
        self.last_pos = pos;
    }

    pub fn last_pos(&self) -> Vec2 {
        self.last_pos
    }

    /// Repeats elapsed by `now_ms`.
    pub fn due(&mut self, now_ms: Millis) -> u32 {
        self.timer.due(now_ms)
    }

    pub fn cancel(&mut self) {
        self.timer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_swarm_and_rifle_repeat() {
        assert_eq!(
            TriggerKind::for_weapon(WeaponKind::Swarm),
            Some(TriggerKind::SpawnCritters)
        );
        assert_eq!(
            TriggerKind::for_weapon(WeaponKind::Rifle),
            Some(TriggerKind::RapidFire)
        );
        for kind in [
            WeaponKind::Pistol,
            WeaponKind::Shotgun,
            WeaponKind::Knife,
            WeaponKind::Bat,
            WeaponKind::Hammer,
        ] {
            assert_eq!(TriggerKind::for_weapon(kind), None);
        }
    }

    #[test]
    fn spawn_trigger_repeats_every_100ms() {
        let mut t = RapidTrigger::start(TriggerKind::SpawnCritters, Vec2::ZERO, 0);
        assert_eq!(t.due(99), 0);
        assert_eq!(t.due(100), 1);
        assert_eq!(t.due(350), 2);
    }

    #[test]
    fn fire_trigger_repeats_every_80ms() {
        let mut t = RapidTrigger::start(TriggerKind::RapidFire, Vec2::ZERO, 1000);
        assert_eq!(t.due(1079), 0);
        assert_eq!(t.due(1080), 1);
        assert_eq!(t.due(1240), 2);
    }

    #[test]
    fn cancel_silences_the_trigger() {
        let mut t = RapidTrigger::start(TriggerKind::RapidFire, Vec2::ZERO, 0);
        t.cancel();
        assert_eq!(t.due(10_000), 0);
    }

    #[test]
    fn repeats_track_the_pointer() {
        let mut t = RapidTrigger::start(TriggerKind::SpawnCritters, Vec2::new(10.0, 10.0), 0);
        t.update_pos(Vec2::new(42.0, 24.0));
        assert_eq!(t.last_pos(), Vec2::new(42.0, 24.0));
    }
}
