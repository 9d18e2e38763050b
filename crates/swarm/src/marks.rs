//! Ephemeral decorations: blood marks and muzzle flashes. Both are capped
//! and time-limited, unlike permanent decals.

use engine_core::time::Millis;
use glam::Vec2;

/// How long a blood mark lingers (a beat longer than the corpse fade).
pub const BLOOD_TTL_MS: u64 = 2500;
/// Muzzle flashes are over almost immediately.
pub const FLASH_TTL_MS: u64 = 150;
/// Default cap on concurrent blood marks.
pub const MAX_BLOOD_MARKS: usize = 30;

/// Blood left where a critter was squashed. Sized after its body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloodMark {
    pub pos: Vec2,
    pub id: u64,
    pub size: f32,
    pub created_ms: Millis,
}

/// Brief flash at a gun's impact point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MuzzleFlash {
    pub pos: Vec2,
    pub id: u64,
    pub created_ms: Millis,
}

/// Holds the live decorations. Insertion order is kept, so eviction past
/// the cap is strictly oldest-first.
#[derive(Debug)]
pub struct MarkBoard {
    blood: Vec<BloodMark>,
    flashes: Vec<MuzzleFlash>,
    next_id: u64,
    max_blood: usize,
}

impl Default for MarkBoard {
    fn default() -> Self {
        Self::new(MAX_BLOOD_MARKS)
    }
}

impl MarkBoard {
    pub fn new(max_blood: usize) -> Self {
        Self {
            blood: Vec::new(),
            flashes: Vec::new(),
            next_id: 0,
            max_blood,
        }
    }

    pub fn add_blood(&mut self, pos: Vec2, size: f32, now_ms: Millis) -> u64 {
        let id = self.bump_id();
        self.blood.push(BloodMark {
            pos,
            id,
            size,
            created_ms: now_ms,
        });
        // FIFO eviction: drop from the front until back under the cap.
        while self.blood.len() > self.max_blood {
            self.blood.remove(0);
        }
        id
    }

    pub fn add_flash(&mut self, pos: Vec2, now_ms: Millis) -> u64 {
        let id = self.bump_id();
        self.flashes.push(MuzzleFlash {
            pos,
            id,
            created_ms: now_ms,
        });
        id
    }

    /// Drop everything past its time-to-live.
    pub fn prune(&mut self, now_ms: Millis) {
        self.blood
            .retain(|m| now_ms.saturating_sub(m.created_ms) < BLOOD_TTL_MS);
        self.flashes
            .retain(|f| now_ms.saturating_sub(f.created_ms) < FLASH_TTL_MS);
    }

    pub fn blood(&self) -> &[BloodMark] {
        &self.blood
    }

    pub fn flashes(&self) -> &[MuzzleFlash] {
        &self.flashes
    }

    pub fn clear(&mut self) {
        self.blood.clear();
        self.flashes.clear();
    }

    fn bump_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blood_cap_evicts_oldest_first() {
        let mut board = MarkBoard::new(5);
        let ids: Vec<u64> = (0..8)
            .map(|i| board.add_blood(Vec2::new(i as f32, 0.0), 30.0, i))
            .collect();
        assert_eq!(board.blood().len(), 5);
        let kept: Vec<u64> = board.blood().iter().map(|m| m.id).collect();
        assert_eq!(kept, ids[3..].to_vec());
    }

    #[test]
    fn blood_expires_after_ttl() {
        let mut board = MarkBoard::default();
        board.add_blood(Vec2::ZERO, 25.0, 1000);
        board.prune(1000 + BLOOD_TTL_MS - 1);
        assert_eq!(board.blood().len(), 1);
        board.prune(1000 + BLOOD_TTL_MS);
        assert!(board.blood().is_empty());
    }

    #[test]
    fn flash_expires_quickly() {
        let mut board = MarkBoard::default();
        board.add_flash(Vec2::ZERO, 500);
        board.prune(640);
        assert_eq!(board.flashes().len(), 1);
        board.prune(650);
        assert!(board.flashes().is_empty());
    }

    #[test]
    fn ids_are_unique_across_kinds() {
        let mut board = MarkBoard::default();
        let a = board.add_blood(Vec2::ZERO, 25.0, 0);
        let b = board.add_flash(Vec2::ZERO, 0);
        let c = board.add_blood(Vec2::ZERO, 25.0, 0);
        assert!(a != b && b != c && a != c);
    }

    #[test]
    fn clear_empties_both() {
        let mut board = MarkBoard::default();
        board.add_blood(Vec2::ZERO, 25.0, 0);
        board.add_flash(Vec2::ZERO, 0);
        board.clear();
        assert!(board.blood().is_empty() && board.flashes().is_empty());
    }
}
