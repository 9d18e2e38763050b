//! Wreckroom — headless demo harness.
//!
//! Runs a short scripted wrecking session against a target image (a path
//! given on the command line, or a generated placard) and writes the
//! aftermath to `aftermath.png`.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use engine_core::{Time, Vec2};
use raster::{Pixel, TargetImage};

use game::{Session, Stage, WreckConfig};
use decals::WeaponKind;

fn main() -> Result<()> {
    env_logger::init();

    let config = WreckConfig::load();
    let target = match std::env::args().nth(1) {
        Some(path) => TargetImage::from_path(Path::new(&path))
            .with_context(|| format!("loading target image {path}"))?,
        None => placard(640, 480)?,
    };

    let mut session = Session::new(config);
    session.set_target(target);
    assert_eq!(session.stage(), Stage::ArmSelect);

    let mut time = Time::new();

    // A few one-shot impacts across the surface.
    let clicks = [
        (WeaponKind::Pistol, Vec2::new(320.0, 180.0)),
        (WeaponKind::Shotgun, Vec2::new(720.0, 260.0)),
        (WeaponKind::Knife, Vec2::new(480.0, 420.0)),
        (WeaponKind::Hammer, Vec2::new(900.0, 480.0)),
        (WeaponKind::Bat, Vec2::new(200.0, 520.0)),
    ];
    for (weapon, at) in clicks {
        time.update();
        session.select_weapon(weapon);
        session.pointer_pressed(at, time.now_ms());
        session.pointer_released();
        session.frame(time.now_ms());
    }

    // Hold the rifle for a burst of rapid fire.
    session.select_weapon(WeaponKind::Rifle);
    time.update();
    session.pointer_pressed(Vec2::new(560.0, 300.0), time.now_ms());
    run_for(&mut session, &mut time, Duration::from_millis(400));
    session.pointer_released();

    // Drop a handful of critters, then squash one.
    session.select_weapon(WeaponKind::Swarm);
    time.update();
    session.pointer_pressed(Vec2::new(640.0, 360.0), time.now_ms());
    run_for(&mut session, &mut time, Duration::from_millis(500));
    session.pointer_released();

    let victim = session
        .scene()
        .and_then(|scene| scene.critters().first().map(|c| c.pos));
    if let Some(pos) = victim {
        session.select_weapon(WeaponKind::Hammer);
        time.update();
        session.pointer_pressed(pos, time.now_ms());
        session.pointer_released();
    }
    run_for(&mut session, &mut time, Duration::from_millis(300));

    let scene = session
        .scene()
        .context("session lost its scene mid-demo")?;
    log::info!(
        "demo done: {} hits, {} decals, {} critters on the field, {} blood marks",
        scene.hit_count(),
        scene.decals().len(),
        scene.population(),
        scene.marks().blood().len(),
    );

    let out = Path::new("aftermath.png");
    scene.surface().save_png(out)?;
    println!(
        "wreckroom: {} hits landed, aftermath saved to {}",
        scene.hit_count(),
        out.display()
    );
    Ok(())
}

/// Drive frames in (roughly) real time for the given span.
fn run_for(session: &mut Session, time: &mut Time, span: Duration) {
    let until = time.now_ms() + span.as_millis() as u64;
    loop {
        std::thread::sleep(Duration::from_millis(4));
        time.update();
        let now = time.now_ms();
        session.frame(now);
        if now >= until {
            break;
        }
    }
}

/// Generated stand-in target: a framed placard with diagonal stripes, so
/// decals are visible without shipping an image.
fn placard(width: u32, height: u32) -> Result<TargetImage, raster::TargetError> {
    let pixels = (0..width * height)
        .map(|i| {
            let (x, y) = (i % width, i / width);
            let edge = x < 8 || y < 8 || x >= width - 8 || y >= height - 8;
            if edge {
                Pixel::new(60, 60, 70, 255)
            } else if (x + y) / 24 % 2 == 0 {
                Pixel::new(235, 230, 220, 255)
            } else {
                Pixel::new(190, 200, 210, 255)
            }
        })
        .collect();
    TargetImage::from_pixels(width, height, pixels)
}
