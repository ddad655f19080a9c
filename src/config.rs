//! Application configuration
//!
//! Loaded once at startup from `config.json` in the platform config
//! directory, or from the file named by `BEVYSOLAR_CONFIG`:
//! - macOS: ~/Library/Application Support/bevysolar/
//! - Linux: ~/.config/bevysolar/
//! - Windows: %APPDATA%\bevysolar\config\
//!
//! Every field is optional; missing fields take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV_VAR: &str = "BEVYSOLAR_CONFIG";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory under `assets/` holding `<body>.glb` files.
    pub asset_dir: String,
    /// Simulated days per real second in static mode.
    pub static_speed: f64,
    /// Frames taken by a one-shot focus transition.
    pub transition_steps: u32,
    /// Camera offset from the central body when focused on it.
    pub central_offset: [f32; 3],
    /// Camera offset from any other focused body.
    pub body_offset: [f32; 3],
    /// Fraction of the remaining distance the follow camera covers per frame.
    pub follow_position_blend: f32,
    pub follow_focus_blend: f32,
    /// Multiplicative scale applied to the hovered body.
    pub hover_pulse: f32,
    pub orbit_segments: usize,
    pub moon_orbit_segments: usize,
    /// Parent the Moon's pivot to Earth's instead of freezing it where
    /// Earth was when the Moon loaded.
    pub live_moon_anchor: bool,
    pub star_count: usize,
    pub star_spread: f32,
    pub star_seed: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            asset_dir: "Planets".to_string(),
            static_speed: 10.0,
            transition_steps: 60,
            central_offset: [600.0, 300.0, 600.0],
            body_offset: [60.0, 120.0, 90.0],
            follow_position_blend: 0.02,
            follow_focus_blend: 0.05,
            hover_pulse: 1.1,
            orbit_segments: 256,
            moon_orbit_segments: 128,
            live_moon_anchor: false,
            star_count: 20_000,
            star_spread: 3000.0,
            star_seed: 0x5EED_2000,
        }
    }
}

impl AppConfig {
    /// Resolve the config path: `BEVYSOLAR_CONFIG` first, then the platform
    /// config directory.
    pub fn default_path() -> Result<PathBuf, anyhow::Error> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let proj_dirs = ProjectDirs::from("", "", "bevysolar")
            .ok_or_else(|| anyhow::anyhow!("Failed to resolve config directory"))?;
        Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Read the config at `path`.
    ///
    /// Returns Ok(None) if the file doesn't exist.
    /// Returns Err if the file exists but cannot be read or parsed.
    pub fn read(path: &Path) -> Result<Option<Self>, anyhow::Error> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Ok(Some(Self::parse(&contents)?))
    }

    pub fn parse(contents: &str) -> Result<Self, anyhow::Error> {
        let config: Self = serde_json::from_str(contents).context("parsing config json")?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        let loaded = Self::default_path().and_then(|path| {
            let cfg = Self::read(&path)?;
            if cfg.is_some() {
                info!("Loaded config from {}", path.display());
            }
            Ok(cfg)
        });
        match loaded {
            Ok(cfg) => cfg.unwrap_or_default(),
            Err(err) => {
                warn!("Using default config: {:#}", err);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !(self.static_speed.is_finite() && self.static_speed >= 0.0) {
            anyhow::bail!("static_speed must be a non-negative number");
        }
        if self.transition_steps == 0 {
            anyhow::bail!("transition_steps must be at least 1");
        }
        for (name, blend) in [
            ("follow_position_blend", self.follow_position_blend),
            ("follow_focus_blend", self.follow_focus_blend),
        ] {
            if !(0.0..=1.0).contains(&blend) {
                anyhow::bail!("{} must be within [0, 1], got {}", name, blend);
            }
        }
        if !(self.hover_pulse.is_finite() && self.hover_pulse > 0.0) {
            anyhow::bail!("hover_pulse must be positive");
        }
        if self.orbit_segments < 3 || self.moon_orbit_segments < 3 {
            anyhow::bail!("orbit rings need at least 3 segments");
        }
        for (name, offset) in [
            ("central_offset", self.central_offset),
            ("body_offset", self.body_offset),
        ] {
            if !offset.iter().all(|c| c.is_finite()) {
                anyhow::bail!("{} must be finite, got {:?}", name, offset);
            }
        }
        if !(self.star_spread.is_finite() && self.star_spread >= 0.0) {
            anyhow::bail!("star_spread must be a non-negative number");
        }
        Ok(())
    }

    pub fn central_offset(&self) -> Vec3 {
        Vec3::from_array(self.central_offset)
    }

    pub fn body_offset(&self) -> Vec3 {
        Vec3::from_array(self.body_offset)
    }
}
