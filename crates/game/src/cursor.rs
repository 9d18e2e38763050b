//! Decorative weapon cursor collaborator. Purely presentational: given the
//! active weapon and the pointer, it says where to park the weapon model
//! (offset from the crosshair) and which visual to use — the 3D model when
//! one ships, a glyph fallback otherwise. No data flows back into the core.

use glam::Vec2;

use decals::WeaponKind;

/// How the model is framed inside its little overlay viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorStyle {
    pub scale: f32,
    pub camera_z: f32,
    pub offset_y: f32,
    /// Yaw in radians.
    pub rotation_y: f32,
    /// Offset of the weapon visual from the crosshair, in pixels.
    pub screen_offset: Vec2,
}

const DEFAULT_STYLE: CursorStyle = CursorStyle {
    scale: 2.5,
    camera_z: 5.0,
    offset_y: 0.0,
    rotation_y: 210.0 * (std::f32::consts::PI / 180.0),
    screen_offset: Vec2::new(50.0, 50.0),
};

impl CursorStyle {
    pub fn for_weapon(weapon: WeaponKind) -> CursorStyle {
        let deg = std::f32::consts::PI / 180.0;
        match weapon {
            WeaponKind::Pistol => CursorStyle {
                scale: 3.5,
                camera_z: 3.0,
                offset_y: 0.0,
                rotation_y: 210.0 * deg,
                screen_offset: Vec2::new(80.0, 60.0),
            },
            WeaponKind::Shotgun => CursorStyle {
                scale: 4.5,
                camera_z: 3.0,
                offset_y: -0.5,
                rotation_y: 200.0 * deg,
                screen_offset: Vec2::new(100.0, 80.0),
            },
            WeaponKind::Rifle => CursorStyle {
                scale: 5.0,
                camera_z: 3.0,
                offset_y: -0.3,
                rotation_y: 200.0 * deg,
                screen_offset: Vec2::new(120.0, 80.0),
            },
            WeaponKind::Hammer => CursorStyle {
                scale: 3.0,
                camera_z: 5.0,
                offset_y: 0.0,
                rotation_y: 210.0 * deg,
                screen_offset: Vec2::new(60.0, 60.0),
            },
            _ => DEFAULT_STYLE,
        }
    }
}

/// What to show: the shipped model, or a glyph when there is none (or the
/// host failed to load it and degraded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorVisual {
    Model(&'static str),
    Glyph(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPlacement {
    /// Where the visual sits on screen.
    pub pos: Vec2,
    pub visual: CursorVisual,
    /// Overlay viewport edge length in pixels; long guns get more room.
    pub viewport_px: u32,
    pub style: CursorStyle,
}

/// Compute the cursor placement for the current pointer position.
pub fn place_cursor(weapon: WeaponKind, pointer: Vec2) -> CursorPlacement {
    let style = CursorStyle::for_weapon(weapon);
    let visual = match weapon.model_path() {
        Some(path) => CursorVisual::Model(path),
        None => CursorVisual::Glyph(glyph(weapon)),
    };
    let viewport_px = match weapon {
        WeaponKind::Shotgun | WeaponKind::Rifle => 250,
        _ => 150,
    };
    CursorPlacement {
        pos: pointer + style.screen_offset,
        visual,
        viewport_px,
        style,
    }
}

fn glyph(weapon: WeaponKind) -> &'static str {
    match weapon {
        WeaponKind::Knife => "🔪",
        WeaponKind::Bat => "🏏",
        WeaponKind::Swarm => "🪳",
        _ => "🎯",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modeled_weapons_use_their_model() {
        let p = place_cursor(WeaponKind::Pistol, Vec2::new(10.0, 10.0));
        assert!(matches!(p.visual, CursorVisual::Model(_)));
        assert_eq!(p.pos, Vec2::new(90.0, 70.0));
    }

    #[test]
    fn modelless_weapons_fall_back_to_glyphs() {
        for kind in [WeaponKind::Knife, WeaponKind::Bat, WeaponKind::Swarm] {
            let p = place_cursor(kind, Vec2::ZERO);
            assert!(matches!(p.visual, CursorVisual::Glyph(_)), "{kind:?}");
        }
    }

    #[test]
    fn long_guns_get_the_big_viewport() {
        assert_eq!(place_cursor(WeaponKind::Rifle, Vec2::ZERO).viewport_px, 250);
        assert_eq!(place_cursor(WeaponKind::Hammer, Vec2::ZERO).viewport_px, 150);
    }
}
