//! Fire-and-forget sound playback for weapon and critter events.
//!
//! Playback is best-effort by contract: a missing clip or a backend error
//! degrades to silence with a debug log, never an error to the caller.
//! Only loading reports failures, so the session can decide to go quiet.

use anyhow::Result;
use kira::{
    manager::{backend::DefaultBackend, AudioManager, AudioManagerSettings},
    sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings},
    tween::Tween,
};
use rand::prelude::*;
use std::collections::HashMap;
use std::path::Path;

/// Event-keyed clip sets. Events are weapon codes plus the critter cues;
/// firing picks one clip at random, like the original rotates its samples.
pub struct SoundBank {
    manager: AudioManager,
    clips: HashMap<String, Vec<StaticSoundData>>,
    active: Vec<StaticSoundHandle>,
    rng: StdRng,
}

impl SoundBank {
    /// Create the bank. Fails only when no audio backend is available, in
    /// which case the caller runs silent.
    pub fn new() -> Result<Self> {
        let manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())?;
        Ok(Self {
            manager,
            clips: HashMap::new(),
            active: Vec::new(),
            rng: StdRng::from_entropy(),
        })
    }

    /// Load a clip from a file and file it under `event`. Events may carry
    /// several clips; play picks among them.
    pub fn load_clip(&mut self, event: &str, path: &Path) -> Result<()> {
        let data = StaticSoundData::from_file(path)?;
        self.clips.entry(event.to_string()).or_default().push(data);
        Ok(())
    }

    /// Number of clips loaded for an event.
    pub fn clip_count(&self, event: &str) -> usize {
        self.clips.get(event).map_or(0, Vec::len)
    }

    /// Play a random clip for `event` at `volume`. Unknown events and
    /// playback failures are swallowed (logged at debug level).
    pub fn play(&mut self, event: &str, volume: f64) {
        let Some(set) = self.clips.get(event) else {
            return;
        };
        let Some(data) = set.choose(&mut self.rng).cloned() else {
            return;
        };
        let settings = StaticSoundSettings::new().volume(volume);
        match self.manager.play(data.with_settings(settings)) {
            Ok(handle) => self.active.push(handle),
            Err(e) => log::debug!("sound playback failed for {event}: {e}"),
        }
    }

    /// Drop handles for sounds that finished.
    pub fn cleanup(&mut self) {
        self.active
            .retain(|handle| handle.state() != kira::sound::PlaybackState::Stopped);
    }

    /// Stop everything currently playing.
    pub fn stop_all(&mut self) {
        for handle in &mut self.active {
            let _ = handle.stop(Tween::default());
        }
        self.active.clear();
    }

    /// Set master volume (0.0 to 1.0).
    pub fn set_master_volume(&mut self, volume: f64) {
        let _ = self
            .manager
            .main_track()
            .set_volume(volume, Tween::default());
    }
}
