//! terrain_plugin - Engine independent marching-cubes terrain generation
//!
//! This crate turns a noise-driven density function into chunked triangle
//! meshes. Each chunk is a 16 × 256 × 16 grid of `f32` densities populated in
//! parallel, then polygonised with classic marching cubes.
//!
//! # Features
//!
//! - **Density Synthesis**: Mountain, plateau, cave, and floor layers composed
//!   from fractal noise (pluggable [`terrain_noise::NoisePrimitive`])
//! - **Parallel Population**: X slabs of each field split across a reusable
//!   rayon pool, bit-identical for any worker count
//! - **Marching Cubes**: 256-configuration table lookup, clamped edge
//!   interpolation, flat face normals, unindexed triangle soup
//! - **Chunk Grid**: Rectangular grid with an explicit
//!   `Idle → Generating → Ready` lifecycle and a thread-safe regeneration
//!   trigger
//!
//! # Example
//!
//! ```ignore
//! use terrain_plugin::{RecordingBackend, TerrainConfig, TerrainWorld, WorldSeed};
//!
//! let mut world = TerrainWorld::new(TerrainConfig::default())?;
//! let mut backend = RecordingBackend::new();
//!
//! world.build_all(WorldSeed::from_time(), &mut backend)?;
//!
//! // Each frame
//! world.poll_trigger(&mut backend)?;
//! world.present(&mut backend);
//! ```

pub mod constants;
pub mod edge_table;
pub mod tri_table;
pub mod types;

// Re-export commonly used items
pub use constants::{
  coord_to_index, CHUNK_SIZE, CHUNK_VOLUME, CORNER_OFFSETS, ISOLEVEL, WORLD_HEIGHT,
};
pub use edge_table::{EDGE_CORNERS, EDGE_TABLE};
pub use tri_table::TRI_TABLE;
pub use types::{ChunkCoord, MeshConfig, MeshOutput, MinMaxAABB, Vertex};

// Density field and synthesis
pub mod density;
pub mod field;
pub mod seed;
pub use density::{DensityParams, DensitySynthesizer};
pub use field::{DensityField, FieldDims};
pub use seed::{GenerationContext, WorldSeed};

// Marching cubes extraction
pub mod marching_cubes;

// Worker pool for slab-parallel population
pub mod threading;
pub use threading::WorkerPool;

// Per-chunk pipeline
pub mod pipeline;
pub use pipeline::{ChunkTimings, PassStats};

// Chunk grid and presentation
pub mod chunk;
pub mod presentation;
pub mod world;
pub use chunk::{Chunk, ChunkTransform};
pub use presentation::{DrawCall, NullBackend, RecordingBackend, RenderBackend};
pub use world::{GridState, RegenerationTrigger, TerrainWorld};

// Configuration and errors
pub mod config;
pub mod error;
pub use config::{ChunkConfig, GridConfig, TerrainConfig, WorkerConfig, MAX_HALF_EXTENT};
pub use error::{TerrainError, TerrainResult};

// Engine-agnostic metrics
pub mod metrics;
pub use metrics::GenerationMetrics;

// Noise primitives
pub use terrain_noise;
