//! Headless terrain demo.
//!
//! Builds a chunk grid, then runs a paced frame loop that presents every
//! chunk to a recording backend and periodically requests regeneration
//! through the shared trigger.

mod config;
mod frame_stats;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use terrain_plugin::{GridConfig, RecordingBackend, TerrainWorld, WorldSeed};
use tracing_subscriber::EnvFilter;
use web_time::{Duration, Instant};

use config::DemoConfig;
use frame_stats::FrameStats;

/// Marching-cubes terrain demo.
#[derive(Parser, Debug)]
#[command(name = "terrain_demo")]
#[command(about = "Generates a procedural terrain grid and runs a headless frame loop")]
struct Args {
  /// Path to configuration TOML file.
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Initial world seed (drawn from the clock when omitted).
  #[arg(short, long)]
  seed: Option<f32>,

  /// Frames to run before exiting.
  #[arg(short, long)]
  frames: Option<u64>,

  /// Request regeneration every N frames (0 disables).
  #[arg(short, long)]
  regenerate_every: Option<u64>,

  /// Worker thread count.
  #[arg(short, long)]
  workers: Option<usize>,

  /// Grid half extent on both axes.
  #[arg(short, long)]
  grid: Option<u32>,
}

impl Args {
  fn resolve(self) -> Result<DemoConfig> {
    let mut config = match &self.config {
      Some(path) => DemoConfig::load(path)?,
      None => DemoConfig::default(),
    };

    if let Some(seed) = self.seed {
      config.run.seed = Some(seed);
    }
    if let Some(frames) = self.frames {
      config.run.frames = frames;
    }
    if let Some(every) = self.regenerate_every {
      config.run.regenerate_every = every;
    }
    if let Some(workers) = self.workers {
      config.terrain.workers.count = Some(workers);
    }
    if let Some(half_extent) = self.grid {
      config.terrain.grid = GridConfig::square(half_extent);
    }

    config
      .terrain
      .validate()
      .context("Invalid command line overrides")?;
    Ok(config)
  }
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = Args::parse().resolve()?;
  let run = &config.run;

  let mut world = TerrainWorld::new(config.terrain.clone()).context("Creating terrain world")?;
  let mut backend = RecordingBackend::new();

  tracing::info!(
    chunks = config.terrain.grid.chunk_count(),
    workers = world.workers(),
    "terrain world ready"
  );

  let seed = run.seed.map(WorldSeed::new).unwrap_or_else(WorldSeed::from_time);
  world
    .build_all(seed, &mut backend)
    .context("Initial generation failed")?;

  let trigger = world.trigger();
  let frame_time = Duration::from_millis(run.frame_time_ms);
  let mut stats = FrameStats::new(Instant::now());

  for frame in 1..=run.frames {
    if run.regenerate_every > 0 && frame % run.regenerate_every == 0 {
      trigger.request();
    }

    world
      .poll_trigger(&mut backend)
      .context("Regeneration failed")?;
    world.present(&mut backend);

    let draws = backend.end_frame();
    if let Some(report) = stats.frame(Instant::now(), draws.len()) {
      tracing::info!(
        fps = report.fps(),
        draws = report.draws,
        resident_vertices = backend.resident_vertices(),
        "frame stats"
      );
    }

    if !frame_time.is_zero() {
      std::thread::sleep(frame_time);
    }
  }

  let metrics = world.metrics();
  tracing::info!(
    frames = stats.total_frames(),
    uploads = backend.uploads,
    draws = backend.draws,
    releases = backend.releases,
    orphan_draws = backend.orphan_draws,
    generation = world.context().map(|c| c.generation).unwrap_or_default(),
    avg_populate_us = metrics.avg_populate_us(),
    avg_mesh_us = metrics.avg_mesh_us(),
    vertex_memory_mb = metrics.vertex_memory_mb(),
    "demo finished"
  );

  Ok(())
}
