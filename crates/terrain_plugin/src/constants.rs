//! Chunk layout constants for 16 × 256 × 16 terrain chunks.
//!
//! # Density Field Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        DENSITY FIELD LAYOUT                             │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  X  [0, 16)    chunk-local, partitioned across workers                  │
//! │  Y  [0, 256)   full world height                                        │
//! │  Z  [0, 16)    chunk-local                                              │
//! │                                                                         │
//! │  Cubes: [0, 15) × [0, 255) × [0, 15)                                    │
//! │  A cube corner outside the field reads BOUNDARY_DENSITY.                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Memory Layout
//!
//! ```text
//! Field memory layout (row-major, Z innermost):
//!
//! Address:  0       1       ...  15       16      ...  4095      4096 ...
//! Content: [0,0,0] [0,0,1] ... [0,0,15] [0,1,0] ... [0,255,15] [1,0,0] ...
//!          └────── Z ──────────┘└────── Z ─────...
//!
//! Every X slab is contiguous: slab x covers [x * Y * Z, (x + 1) * Y * Z).
//! ```
//!
//! # 3D Indexing
//!
//! ```text
//! index = x * Y * Z + y * Z + z
//!       = x * 4096 + y * 16 + z        (default dimensions)
//! ```
//!
//! # Cube Corner Order
//!
//! ```text
//!         7──────6          +Y
//!        /│     /│           │  +Z
//!       3─┼────2 │           │ /
//!       │ 4────┼─5           └───+X
//!       │/     │/
//!       0──────1
//!
//!   0 = (0,0,0)    4 = (0,0,1)
//!   1 = (1,0,0)    5 = (1,0,1)
//!   2 = (1,1,0)    6 = (1,1,1)
//!   3 = (0,1,0)    7 = (0,1,1)
//! ```
//!
//! This is the classic marching-cubes corner order, which the lookup tables in
//! [`crate::edge_table`] and [`crate::tri_table`] are built against.

/// Horizontal samples per chunk on X and Z.
pub const CHUNK_SIZE: usize = 16;

/// Vertical samples per chunk (the whole world height).
pub const WORLD_HEIGHT: usize = 256;

/// Samples in one default chunk (16 × 256 × 16 = 65536).
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * WORLD_HEIGHT * CHUNK_SIZE;

/// Density threshold of the extracted surface. Below is solid, at/above is air.
pub const ISOLEVEL: f32 = 0.0;

/// Density substituted for cube corners outside the field.
pub const BOUNDARY_DENSITY: f32 = 1.0;

/// Edge endpoint values closer than this are treated as equal during
/// interpolation.
pub const INTERPOLATION_EPSILON: f32 = 1e-5;

/// Non-uniform scale applied to emitted vertex positions (x, y, z).
pub const AXIS_SCALE: [f32; 3] = [2.0, 1.0, 2.0];

/// Worker count used when the host cannot report its parallelism.
pub const FALLBACK_WORKERS: usize = 4;

/// Cube corner offsets, classic marching-cubes order.
pub const CORNER_OFFSETS: [[usize; 3]; 8] = [
  [0, 0, 0],
  [1, 0, 0],
  [1, 1, 0],
  [0, 1, 0],
  [0, 0, 1],
  [1, 0, 1],
  [1, 1, 1],
  [0, 1, 1],
];

/// Convert 3D coordinates to a linear index for a field of `dims`.
///
/// Layout: X is major axis (stride Y * Z), Y is middle (stride Z), Z is minor
/// (stride 1).
#[inline(always)]
pub const fn coord_to_index(dims: [usize; 3], x: usize, y: usize, z: usize) -> usize {
  x * dims[1] * dims[2] + y * dims[2] + z
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
