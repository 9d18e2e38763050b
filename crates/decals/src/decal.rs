//! Decal records and the render dispatch.

use glam::Vec2;
use raster::Surface;

use crate::patterns;
use crate::weapon::WeaponKind;

/// Rounds in one rifle click.
pub const RIFLE_BURST_COUNT: u32 = 5;

/// One permanent destruction mark. Immutable once created; the scene keeps
/// them in firing order and replays the whole sequence when the surface is
/// invalidated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decal {
    pub pos: Vec2,
    pub size: f32,
    pub kind: WeaponKind,
    /// Drives all pattern randomness, so a replay is pixel-identical.
    pub seed: u32,
}

impl Decal {
    pub fn new(pos: Vec2, size: f32, kind: WeaponKind, seed: u32) -> Self {
        Self {
            pos,
            size,
            kind,
            seed,
        }
    }
}

/// Paint one decal onto the surface. Side effect only; degenerate inputs
/// (empty surface, non-positive size) are a no-op rather than an error.
pub fn render(surface: &mut Surface, decal: &Decal) {
    if surface.is_empty() || decal.size <= 0.0 {
        return;
    }
    match decal.kind {
        WeaponKind::Pistol => patterns::pistol(surface, decal.pos, decal.size, decal.seed),
        WeaponKind::Shotgun => patterns::shotgun(surface, decal.pos, decal.size, decal.seed),
        WeaponKind::Rifle => patterns::rifle(surface, decal.pos, decal.size),
        WeaponKind::Knife => patterns::knife(surface, decal.pos, decal.size, decal.seed),
        WeaponKind::Bat | WeaponKind::Hammer => {
            patterns::blunt(surface, decal.pos, decal.size, decal.seed)
        }
        WeaponKind::Swarm => patterns::squash_stain(surface, decal.pos, decal.size, decal.seed),
    }
}

/// The rifle's click path: five rounds in a vertical-ish line, offsets
/// derived from the shared base seed so the burst shape is deterministic.
pub fn rifle_burst(pos: Vec2, size: f32, base_seed: u32) -> Vec<Decal> {
    (0..RIFLE_BURST_COUNT)
        .map(|i| {
            let dx = ((base_seed.wrapping_add(i * 1000)) % 30) as f32 - 15.0;
            let dy = (i as f32 - 2.0) * 25.0 + ((base_seed.wrapping_add(i * 2000)) % 10) as f32
                - 5.0;
            Decal::new(
                pos + Vec2::new(dx, dy),
                size * 0.7,
                WeaponKind::Rifle,
                base_seed.wrapping_add(i),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use raster::Pixel;

    fn painted_pixels(surface: &Surface) -> usize {
        (0..surface.height())
            .flat_map(|y| (0..surface.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| surface.get_pixel(x, y) != Pixel::TRANSPARENT)
            .count()
    }

    #[test]
    fn every_kind_marks_the_surface() {
        for kind in WeaponKind::ALL {
            let mut s = Surface::new(200, 200);
            let decal = Decal::new(Vec2::new(100.0, 100.0), 40.0, kind, 777);
            render(&mut s, &decal);
            assert!(painted_pixels(&s) > 0, "{kind:?} painted nothing");
        }
    }

    #[test]
    fn same_seed_renders_identically() {
        for kind in WeaponKind::ALL {
            let decal = Decal::new(Vec2::new(80.0, 90.0), 36.0, kind, 4242);
            let mut a = Surface::new(180, 180);
            let mut b = Surface::new(180, 180);
            render(&mut a, &decal);
            render(&mut b, &decal);
            assert_eq!(a.to_bytes(), b.to_bytes(), "{kind:?} not reproducible");
        }
    }

    #[test]
    fn pistol_seeds_change_the_pattern() {
        let mut a = Surface::new(180, 180);
        let mut b = Surface::new(180, 180);
        render(&mut a, &Decal::new(Vec2::new(90.0, 90.0), 36.0, WeaponKind::Pistol, 1));
        render(&mut b, &Decal::new(Vec2::new(90.0, 90.0), 36.0, WeaponKind::Pistol, 2));
        assert_ne!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn rifle_ignores_seed() {
        let mut a = Surface::new(180, 180);
        let mut b = Surface::new(180, 180);
        render(&mut a, &Decal::new(Vec2::new(90.0, 90.0), 36.0, WeaponKind::Rifle, 1));
        render(&mut b, &Decal::new(Vec2::new(90.0, 90.0), 36.0, WeaponKind::Rifle, 999_999));
        assert_eq!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn zero_size_is_noop() {
        let mut s = Surface::new(50, 50);
        render(&mut s, &Decal::new(Vec2::new(25.0, 25.0), 0.0, WeaponKind::Hammer, 3));
        assert_eq!(painted_pixels(&s), 0);
    }

    #[test]
    fn burst_is_five_deterministic_rounds() {
        let origin = Vec2::new(100.0, 100.0);
        let a = rifle_burst(origin, 40.0, 55_555);
        let b = rifle_burst(origin, 40.0, 55_555);
        assert_eq!(a.len(), RIFLE_BURST_COUNT as usize);
        assert_eq!(a, b);
        for (i, d) in a.iter().enumerate() {
            assert_eq!(d.kind, WeaponKind::Rifle);
            assert_eq!(d.size, 40.0 * 0.7);
            assert_eq!(d.seed, 55_555 + i as u32);
            // Horizontal recoil stays inside ±15, vertical rungs are 25 apart.
            assert!((d.pos.x - origin.x).abs() <= 15.0);
            let rung = origin.y + (i as f32 - 2.0) * 25.0;
            assert!((d.pos.y - rung).abs() <= 5.0);
        }
    }

    #[test]
    fn burst_offsets_follow_the_seed_formula() {
        let base = 7_321u32;
        let burst = rifle_burst(Vec2::ZERO, 10.0, base);
        for (i, d) in burst.iter().enumerate() {
            let i = i as u32;
            let dx = ((base + i * 1000) % 30) as f32 - 15.0;
            let dy = (i as f32 - 2.0) * 25.0 + ((base + i * 2000) % 10) as f32 - 5.0;
            assert_eq!(d.pos.x, dx);
            assert_eq!(d.pos.y, dy);
        }
    }
}
