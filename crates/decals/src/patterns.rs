//! Per-weapon pattern painters. Each takes the impact point, the rolled
//! size, and (except the rifle) a replay generator seeded from the decal.

use std::f32::consts::{PI, TAU};

use engine_core::SeededRng;
use glam::Vec2;
use raster::{Pixel, Surface};

/// Ink tones shared by the crack work.
const INK_DARK: Pixel = Pixel::grey(26); // #1a1a1a
const INK_MID: Pixel = Pixel::grey(34); // #222
const INK_LIGHT: Pixel = Pixel::grey(51); // #333

/// Small filled hole, 5–8 radiating cracks, soft scorch halo.
pub fn pistol(surface: &mut Surface, pos: Vec2, size: f32, seed: u32) {
    let mut rng = SeededRng::new(seed);
    let hole = size / 3.0;

    surface.fill_circle(pos, hole, Pixel::BLACK, 0.9);

    let crack_count = rng.range_usize(5, 9);
    for i in 0..crack_count {
        let angle = (TAU / crack_count as f32) * i as f32 + rng.next_f32() * 0.5;
        let length = size * 0.6 + rng.next_f32() * size * 0.4;
        let dir = Vec2::from_angle(angle);
        surface.stroke_segment(pos + dir * hole, pos + dir * length, 2.0, INK_LIGHT, 0.8);
    }

    let scorch = [
        (0.0, Pixel::new(50, 50, 50, 204)),
        (0.5, Pixel::new(80, 60, 40, 102)),
        (1.0, Pixel::new(0, 0, 0, 0)),
    ];
    surface.fill_radial_gradient(pos, size, &scorch, 0.6);
}

/// 7–10 scattered pellet holes, each with mini cracks, under one wide scorch.
pub fn shotgun(surface: &mut Surface, pos: Vec2, size: f32, seed: u32) {
    let mut rng = SeededRng::new(seed);
    let spread = size * 1.2;

    let pellet_count = rng.range_usize(7, 11);
    for _ in 0..pellet_count {
        let angle = rng.next_f32() * TAU;
        let dist = rng.next_f32() * spread;
        let pellet = pos + Vec2::from_angle(angle) * dist;
        let pellet_size = 4.0 + rng.next_f32() * 8.0;

        surface.fill_circle(pellet, pellet_size, Pixel::BLACK, 0.9);

        let mini_count = rng.range_usize(3, 6);
        for j in 0..mini_count {
            let crack_angle = (TAU / mini_count as f32) * j as f32 + rng.next_f32() * 0.5;
            let crack_len = pellet_size * 1.5 + rng.next_f32() * pellet_size;
            let dir = Vec2::from_angle(crack_angle);
            surface.stroke_segment(
                pellet + dir * pellet_size,
                pellet + dir * crack_len,
                1.0,
                INK_MID,
                0.7,
            );
        }
    }

    let scorch = [
        (0.0, Pixel::new(60, 50, 40, 127)),
        (0.6, Pixel::new(40, 35, 30, 76)),
        (1.0, Pixel::new(0, 0, 0, 0)),
    ];
    surface.fill_radial_gradient(pos, spread * 1.3, &scorch, 0.5);
}

/// Clean puncture: no randomness at all, so identical shots at the same
/// point overlay exactly. Fixed hole ratio, metallic ring, 6 even cracks.
pub fn rifle(surface: &mut Surface, pos: Vec2, size: f32) {
    let hole = size / 2.5;

    surface.fill_circle(pos, hole, Pixel::BLACK, 1.0);
    surface.stroke_circle(pos, hole + 2.0, 2.0, INK_LIGHT, 0.8);

    for i in 0..6 {
        let dir = Vec2::from_angle((TAU / 6.0) * i as f32);
        surface.stroke_segment(pos + dir * hole, pos + dir * (size * 0.8), 1.5, INK_DARK, 0.8);
    }

    let scorch = [
        (0.0, Pixel::new(80, 60, 40, 178)),
        (0.5, Pixel::new(50, 40, 30, 102)),
        (1.0, Pixel::new(0, 0, 0, 0)),
    ];
    surface.fill_radial_gradient(pos, size * 0.7, &scorch, 0.6);
}

/// One curved slash at a random angle, stroked wide-then-thin for depth,
/// over a soft dark-red mark.
pub fn knife(surface: &mut Surface, pos: Vec2, size: f32, seed: u32) {
    let mut rng = SeededRng::new(seed);
    let angle = rng.next_f32() * PI;
    let half = size * 1.5 * 0.5;
    let dir = Vec2::from_angle(angle);
    let from = pos - dir * half;
    let to = pos + dir * half;
    let mid = pos
        + Vec2::new(
            (rng.next_f32() - 0.5) * 10.0,
            (rng.next_f32() - 0.5) * 10.0,
        );

    surface.stroke_quad_curve(from, mid, to, 4.0, INK_DARK, 0.9);
    surface.stroke_quad_curve(from, mid, to, 2.0, Pixel::BLACK, 0.9);

    let blood = [
        (0.0, Pixel::new(139, 0, 0, 153)),
        (1.0, Pixel::new(139, 0, 0, 0)),
    ];
    surface.fill_radial_gradient(pos, size / 2.0, &blood, 0.5);
}

/// Spiderweb impact at half radius: jittered jagged cracks with the odd
/// branch, one concentric ring, and a shockwave halo. Shared by bat and
/// hammer.
pub fn blunt(surface: &mut Surface, pos: Vec2, size: f32, seed: u32) {
    let mut rng = SeededRng::new(seed);
    let reduced = size * 0.5;

    surface.fill_circle(pos, reduced / 4.0, INK_DARK, 0.8);

    let crack_count = rng.range_usize(6, 9);
    for i in 0..crack_count {
        let angle = (TAU / crack_count as f32) * i as f32 + rng.next_f32() * 0.3;
        let length = reduced * 0.7 + rng.next_f32() * reduced * 0.3;
        let seg_len = length / 3.0;
        let mut cursor = pos;
        for seg in 0..3 {
            let seg_angle = angle + (rng.next_f32() - 0.5) * 0.4;
            let next = cursor + Vec2::from_angle(seg_angle) * seg_len;
            surface.stroke_segment(cursor, next, 2.0, Pixel::BLACK, 0.8);
            // At most one fork per crack, only off the last segment.
            if seg > 1 && rng.next_f32() > 0.7 {
                let branch_angle = seg_angle + (rng.next_f32() - 0.5) * 1.5;
                let branch = next + Vec2::from_angle(branch_angle) * (seg_len * 0.4);
                surface.stroke_segment(next, branch, 2.0, Pixel::BLACK, 0.8);
            }
            cursor = next;
        }
    }

    surface.stroke_circle(pos, reduced * 0.5, 1.5, Pixel::BLACK, 0.5);

    let shock = [
        (0.0, Pixel::new(100, 100, 100, 127)),
        (0.5, Pixel::new(50, 50, 50, 76)),
        (1.0, Pixel::new(0, 0, 0, 0)),
    ];
    surface.fill_radial_gradient(pos, reduced * 0.8, &shock, 0.3);
}

/// Residue of a squashed critter: scattered dark specks in a sticky
/// green-tinted stain.
pub fn squash_stain(surface: &mut Surface, pos: Vec2, size: f32, seed: u32) {
    let mut rng = SeededRng::new(seed);

    let dot_count = rng.range_usize(5, 10);
    for _ in 0..dot_count {
        let dot = pos
            + Vec2::new(
                (rng.next_f32() - 0.5) * size,
                (rng.next_f32() - 0.5) * size,
            );
        let dot_size = 2.0 + rng.next_f32() * 4.0;
        surface.fill_circle(dot, dot_size, Pixel::grey(42), 0.8);
    }

    let stain = [
        (0.0, Pixel::new(50, 80, 50, 153)),
        (1.0, Pixel::new(30, 50, 30, 0)),
    ];
    surface.fill_radial_gradient(pos, size / 2.0, &stain, 0.4);
}
