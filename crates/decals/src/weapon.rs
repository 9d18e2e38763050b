//! The closed set of weapon-like tools and their static catalog data.

use rand::Rng;

/// Tools the user can wreck the target with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponKind {
    /// Light sidearm: small hole, a few cracks, soft scorch.
    Pistol,
    /// Spread weapon: scattered pellet holes under one big scorch.
    Shotgun,
    /// Precision weapon: clean deterministic puncture, fires 5-round bursts.
    Rifle,
    /// Blade: curved slash with a blood mark.
    Knife,
    /// Blunt: spiderweb cracks, reduced radius.
    Bat,
    /// Blunt: same spiderweb family as the bat, heavier size class.
    Hammer,
    /// Drops wandering critters instead of marking the surface.
    Swarm,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 7] = [
        WeaponKind::Pistol,
        WeaponKind::Shotgun,
        WeaponKind::Rifle,
        WeaponKind::Knife,
        WeaponKind::Bat,
        WeaponKind::Hammer,
        WeaponKind::Swarm,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            WeaponKind::Pistol => "Pistol",
            WeaponKind::Shotgun => "Shotgun",
            WeaponKind::Rifle => "Rifle",
            WeaponKind::Knife => "Knife",
            WeaponKind::Bat => "Bat",
            WeaponKind::Hammer => "Hammer",
            WeaponKind::Swarm => "Critter Swarm",
        }
    }

    /// Armory code shown in the HUD.
    pub fn code(&self) -> &'static str {
        match self {
            WeaponKind::Pistol => "WPN-001",
            WeaponKind::Shotgun => "WPN-002",
            WeaponKind::Rifle => "WPN-003",
            WeaponKind::Knife => "WPN-004",
            WeaponKind::Bat => "WPN-005",
            WeaponKind::Hammer => "WPN-006",
            WeaponKind::Swarm => "WPN-007",
        }
    }

    pub fn decal_size(&self) -> DecalSize {
        match self {
            WeaponKind::Pistol => DecalSize::Small,
            WeaponKind::Shotgun => DecalSize::Medium,
            WeaponKind::Rifle => DecalSize::Small,
            WeaponKind::Knife => DecalSize::Medium,
            WeaponKind::Bat => DecalSize::Large,
            WeaponKind::Hammer => DecalSize::Large,
            WeaponKind::Swarm => DecalSize::Tiny,
        }
    }

    /// Decorative 3D model for the cursor, when one ships.
    pub fn model_path(&self) -> Option<&'static str> {
        match self {
            WeaponKind::Pistol => Some("assets/3dmodel/tt_pistol/tt_pistol.fbx"),
            WeaponKind::Shotgun => Some("assets/3dmodel/shotgun/shotgun.fbx"),
            WeaponKind::Rifle => Some("assets/3dmodel/colt.fbx"),
            WeaponKind::Hammer => Some("assets/3dmodel/sledgehammer/sledgehammer.fbx"),
            WeaponKind::Knife | WeaponKind::Bat | WeaponKind::Swarm => None,
        }
    }

    /// Sound clips for the fire / spawn cue; one is picked at random.
    pub fn sound_paths(&self) -> &'static [&'static str] {
        match self {
            WeaponKind::Pistol => &["assets/sound/gunshot01.mp3"],
            WeaponKind::Shotgun => &["assets/sound/gunshot02.mp3"],
            WeaponKind::Rifle => &["assets/sound/silencer_gunshot.mp3"],
            WeaponKind::Knife => &["assets/sound/knife.mp3"],
            WeaponKind::Bat => &["assets/sound/bat.mp3"],
            WeaponKind::Hammer => &["assets/sound/hammer.mp3"],
            WeaponKind::Swarm => &["assets/sound/chitter.mp3"],
        }
    }

    /// Guns get a muzzle flash and a brightness pulse; melee and the swarm
    /// tool do not.
    pub fn is_gun(&self) -> bool {
        matches!(
            self,
            WeaponKind::Pistol | WeaponKind::Shotgun | WeaponKind::Rifle
        )
    }
}

/// Size class of the mark a weapon leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecalSize {
    Tiny,
    Small,
    Medium,
    Large,
}

impl DecalSize {
    /// Sample a concrete pixel size for one impact. Entropy-driven: size is
    /// rolled once at fire time and stored on the decal, not replayed.
    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        match self {
            DecalSize::Tiny => 15.0 + rng.gen::<f32>() * 10.0,
            DecalSize::Small => 30.0 + rng.gen::<f32>() * 20.0,
            DecalSize::Medium => 60.0 + rng.gen::<f32>() * 30.0,
            DecalSize::Large => 100.0 + rng.gen::<f32>() * 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<_> = WeaponKind::ALL.iter().map(|w| w.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), WeaponKind::ALL.len());
    }

    #[test]
    fn guns_are_exactly_the_three_firearms() {
        let guns: Vec<_> = WeaponKind::ALL.iter().filter(|w| w.is_gun()).collect();
        assert_eq!(guns.len(), 3);
        assert!(!WeaponKind::Hammer.is_gun());
        assert!(!WeaponKind::Swarm.is_gun());
    }

    #[test]
    fn size_classes_sample_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!((15.0..25.0).contains(&DecalSize::Tiny.sample(&mut rng)));
            assert!((30.0..50.0).contains(&DecalSize::Small.sample(&mut rng)));
            assert!((60.0..90.0).contains(&DecalSize::Medium.sample(&mut rng)));
            assert!((100.0..150.0).contains(&DecalSize::Large.sample(&mut rng)));
        }
    }
}
