//! Toy configuration (surface, caps, cadence, volume). Loaded from
//! wreckroom.ron at startup.

use serde::{Deserialize, Serialize};

/// Persistent settings. Loaded from `wreckroom.ron` in the current
/// directory; every field falls back to its default when missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WreckConfig {
    /// Surface width in pixels.
    #[serde(default = "default_surface_width")]
    pub surface_width: u32,
    /// Surface height in pixels.
    #[serde(default = "default_surface_height")]
    pub surface_height: u32,
    /// Maximum critters alive (or fading) at once.
    #[serde(default = "default_max_critters")]
    pub max_critters: usize,
    /// Maximum concurrent blood marks; oldest are evicted past this.
    #[serde(default = "default_max_blood_marks")]
    pub max_blood_marks: usize,
    /// Simulation tick interval in milliseconds (16 ≈ 60 Hz).
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Width of the no-go band critters reflect off near each edge.
    #[serde(default = "default_edge_margin")]
    pub edge_margin: f32,
    /// Master volume, 0.0 to 1.0.
    #[serde(default = "default_master_volume")]
    pub master_volume: f64,
}

fn default_surface_width() -> u32 {
    1280
}
fn default_surface_height() -> u32 {
    720
}
fn default_max_critters() -> usize {
    50
}
fn default_max_blood_marks() -> usize {
    30
}
fn default_tick_interval_ms() -> u64 {
    16
}
fn default_edge_margin() -> f32 {
    20.0
}
fn default_master_volume() -> f64 {
    1.0
}

impl Default for WreckConfig {
    fn default() -> Self {
        Self {
            surface_width: default_surface_width(),
            surface_height: default_surface_height(),
            max_critters: default_max_critters(),
            max_blood_marks: default_max_blood_marks(),
            tick_interval_ms: default_tick_interval_ms(),
            edge_margin: default_edge_margin(),
            master_volume: default_master_volume(),
        }
    }
}

impl WreckConfig {
    /// Load config from `wreckroom.ron`. Missing or invalid files fall back
    /// to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Save current config to `wreckroom.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("wreckroom.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let c = WreckConfig::default();
        assert_eq!(c.max_critters, 50);
        assert_eq!(c.max_blood_marks, 30);
        assert_eq!(c.tick_interval_ms, 16);
        assert_eq!(c.edge_margin, 20.0);
    }

    #[test]
    fn partial_ron_fills_defaults() {
        let c: WreckConfig = ron::from_str("(max_critters: 10)").unwrap();
        assert_eq!(c.max_critters, 10);
        assert_eq!(c.surface_width, 1280);
    }
}
