//! Configuration parsing for the terrain demo.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use terrain_plugin::TerrainConfig;

/// Root configuration: terrain tables plus a `[run]` table for the driver.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
  /// Frame loop settings.
  pub run: RunConfig,
  /// Terrain settings (`[chunk]`, `[grid]`, `[density]`, `[mesh]`, `[workers]`).
  #[serde(flatten)]
  pub terrain: TerrainConfig,
}

/// Frame loop settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RunConfig {
  /// Frames to simulate before exiting.
  pub frames: u64,
  /// Request a regeneration every this many frames (0 disables).
  pub regenerate_every: u64,
  /// Sleep per frame in milliseconds, to pace the loop like a real renderer.
  pub frame_time_ms: u64,
  /// Fixed initial seed; drawn from the clock when unset.
  pub seed: Option<f32>,
}

impl Default for RunConfig {
  fn default() -> Self {
    Self {
      frames: 120,
      regenerate_every: 0,
      frame_time_ms: 16,
      seed: None,
    }
  }
}

impl DemoConfig {
  /// Load configuration from a TOML file.
  pub fn load(path: &Path) -> Result<Self> {
    let content = std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    Self::parse(&content)
  }

  /// Parse and validate a TOML document.
  pub fn parse(content: &str) -> Result<Self> {
    let config: DemoConfig =
      toml::from_str(content).with_context(|| "Failed to parse config TOML")?;
    config
      .terrain
      .validate()
      .context("Invalid terrain configuration")?;
    Ok(config)
  }
}
