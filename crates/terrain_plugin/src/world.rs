//! TerrainWorld - chunk grid manager.
//!
//! Owns every chunk of the grid, the shared density synthesizer, and the
//! worker pool. A pass walks the grid X-major and generates chunks one after
//! another, uploading each to the backend as soon as it is meshed.
//!
//! ```text
//!            build_all / regenerate_all
//!   ┌──────┐ ─────────────────────────► ┌────────────┐  pass done  ┌───────┐
//!   │ Idle │                            │ Generating ├────────────►│ Ready │
//!   └──────┘                            └────────────┘             └───┬───┘
//!                                             ▲      request while     │
//!                                             │      Generating is     │
//!                                             │      rejected          │
//!                                             └────────────────────────┘
//!                                                  regenerate_all
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use terrain_noise::{NoisePrimitive, PerlinNoise};
use web_time::Instant;

use crate::chunk::Chunk;
use crate::config::TerrainConfig;
use crate::density::DensitySynthesizer;
use crate::error::{TerrainError, TerrainResult};
use crate::metrics::GenerationMetrics;
use crate::pipeline::{generate_chunk, PassStats};
use crate::presentation::RenderBackend;
use crate::seed::{GenerationContext, WorldSeed};
use crate::threading::WorkerPool;
use crate::types::ChunkCoord;

// =============================================================================
// GridState
// =============================================================================

/// Lifecycle of the chunk grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GridState {
  /// No chunks.
  #[default]
  Idle,
  /// A pass is running; further requests are rejected.
  Generating,
  /// Every chunk of the last pass is generated and uploaded.
  Ready,
}

// =============================================================================
// RegenerationTrigger
// =============================================================================

/// Cloneable, thread-safe "regenerate the world" flag.
///
/// Any holder may [`request`](Self::request); the frame driver consumes the
/// request with [`take`](Self::take) once per frame.
#[derive(Clone, Debug, Default)]
pub struct RegenerationTrigger(Arc<AtomicBool>);

impl RegenerationTrigger {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn request(&self) {
    self.0.store(true, Ordering::Release);
  }

  /// Clear the flag, returning whether it was set.
  pub fn take(&self) -> bool {
    self.0.swap(false, Ordering::AcqRel)
  }

  pub fn is_requested(&self) -> bool {
    self.0.load(Ordering::Acquire)
  }
}

// =============================================================================
// TerrainWorld
// =============================================================================

/// Grid of chunks tiling `[-half_x, half_x) × [-half_z, half_z)`.
pub struct TerrainWorld<N: NoisePrimitive = PerlinNoise> {
  config: TerrainConfig,
  synth: DensitySynthesizer<N>,
  pool: WorkerPool,
  chunks: Vec<Chunk>,
  state: GridState,
  context: Option<GenerationContext>,
  trigger: RegenerationTrigger,
  metrics: GenerationMetrics,
}

impl TerrainWorld<PerlinNoise> {
  /// World using the default Perlin primitive.
  pub fn new(config: TerrainConfig) -> TerrainResult<Self> {
    Self::with_noise(config, PerlinNoise::default())
  }
}

impl<N: NoisePrimitive> TerrainWorld<N> {
  /// World sampling `noise`. Validates `config` and builds the worker pool.
  pub fn with_noise(config: TerrainConfig, noise: N) -> TerrainResult<Self> {
    config.validate()?;
    let pool = WorkerPool::from_override(config.workers.count)?;
    let synth = DensitySynthesizer::new(noise, config.density.clone());

    tracing::info!(
      workers = pool.workers(),
      chunks = config.grid.chunk_count(),
      "terrain world created"
    );

    Ok(Self {
      config,
      synth,
      pool,
      chunks: Vec::new(),
      state: GridState::Idle,
      context: None,
      trigger: RegenerationTrigger::new(),
      metrics: GenerationMetrics::new(),
    })
  }

  #[inline]
  pub fn config(&self) -> &TerrainConfig {
    &self.config
  }

  #[inline]
  pub fn state(&self) -> GridState {
    self.state
  }

  #[inline]
  pub fn chunks(&self) -> &[Chunk] {
    &self.chunks
  }

  /// Chunk at grid offset `coord`, if the grid holds one.
  pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
    self.chunks.iter().find(|c| c.coord == coord)
  }

  /// Context of the last pass.
  #[inline]
  pub fn context(&self) -> Option<&GenerationContext> {
    self.context.as_ref()
  }

  /// Handle that requests a regeneration on the next [`poll_trigger`](Self::poll_trigger).
  pub fn trigger(&self) -> RegenerationTrigger {
    self.trigger.clone()
  }

  #[inline]
  pub fn metrics(&self) -> &GenerationMetrics {
    &self.metrics
  }

  #[inline]
  pub fn workers(&self) -> usize {
    self.pool.workers()
  }

  /// Grid offsets in generation order (X outer, Z inner).
  pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> {
    let grid = self.config.grid;
    grid
      .x_range()
      .flat_map(move |x| grid.z_range().map(move |z| ChunkCoord::new(x, z)))
  }

  /// Generate the whole grid under `seed`, replacing any previous chunks.
  pub fn build_all<B: RenderBackend + ?Sized>(
    &mut self,
    seed: WorldSeed,
    backend: &mut B,
  ) -> TerrainResult<PassStats> {
    if self.state == GridState::Generating {
      return Err(TerrainError::GenerationInProgress);
    }

    #[cfg(feature = "trace_spans")]
    let _span = tracing::info_span!("build_all").entered();

    self.release_chunks(backend);
    self.state = GridState::Generating;

    let ctx = match &self.context {
      Some(prev) => prev.next(seed),
      None => GenerationContext::new(seed, 1),
    };
    let start = Instant::now();
    let dims = self.config.chunk.dims();
    let vertical_offset = self.config.chunk.vertical_offset;
    let mut stats = PassStats {
      generation: ctx.generation,
      ..Default::default()
    };

    let coords: Vec<ChunkCoord> = self.coords().collect();
    self.chunks.reserve(coords.len());

    for coord in coords {
      let mut chunk = Chunk::new(coord, dims, vertical_offset);
      let timings = generate_chunk(&self.pool, &self.synth, &self.config.mesh, &mut chunk, &ctx);

      backend.upload(chunk.coord, chunk.vertices());
      stats.record_chunk(timings, chunk.vertex_count());
      self.metrics.record_chunk(timings, chunk.vertex_count());
      self.chunks.push(chunk);
    }

    stats.elapsed_us = start.elapsed().as_micros() as u64;
    self.context = Some(ctx);
    self.state = GridState::Ready;
    self.metrics.record_pass(stats);

    tracing::info!(
      generation = stats.generation,
      seed = ctx.seed.value(),
      chunks = stats.chunks,
      vertices = stats.vertices,
      elapsed_ms = stats.elapsed_us / 1000,
      "generation pass complete"
    );

    Ok(stats)
  }

  /// Drop the whole grid and rebuild it under `seed`.
  pub fn regenerate_all<B: RenderBackend + ?Sized>(
    &mut self,
    seed: WorldSeed,
    backend: &mut B,
  ) -> TerrainResult<PassStats> {
    tracing::info!(seed = seed.value(), "regenerating terrain");
    self.build_all(seed, backend)
  }

  /// Consume a pending trigger request, regenerating under a fresh
  /// time-seeded [`WorldSeed`]. Returns `None` when nothing was requested.
  pub fn poll_trigger<B: RenderBackend + ?Sized>(
    &mut self,
    backend: &mut B,
  ) -> TerrainResult<Option<PassStats>> {
    if !self.trigger.take() {
      return Ok(None);
    }
    self.regenerate_all(WorldSeed::from_time(), backend).map(Some)
  }

  /// Start a backend frame and issue one draw per chunk.
  pub fn present<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
    backend.begin_frame();
    for chunk in &self.chunks {
      backend.draw(chunk.coord, chunk.model_matrix(), chunk.vertex_count());
    }
  }

  /// Release every chunk and return to `Idle`.
  ///
  /// Also recovers a grid left `Generating` by an interrupted pass.
  pub fn clear<B: RenderBackend + ?Sized>(&mut self, backend: &mut B) {
    self.release_chunks(backend);
    self.state = GridState::Idle;
  }

  fn release_chunks<B: RenderBackend + ?Sized>(&mut self, backend: &mut B) {
    for chunk in self.chunks.drain(..) {
      backend.release(chunk.coord);
    }
  }
}

#[cfg(test)]
#[path = "world_test.rs"]
mod world_test;
