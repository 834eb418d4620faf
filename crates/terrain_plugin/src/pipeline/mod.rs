//! Chunk generation pipeline.
//!
//! ```text
//! ┌──────────┐     ┌──────────┐     ┌─────────┐     ┌──────────────┐
//! │ Populate ├────►│  (join)  ├────►│ Meshing ├────►│ Presentation │
//! └──────────┘     └──────────┘     └─────────┘     └──────────────┘
//!      │                                 │                  │
//!  DensityField                     MeshOutput        backend.upload
//!  (slab-parallel)                 (one thread)       (grid manager)
//! ```
//!
//! # Stages
//!
//! 1. **Populate**: every sample of the chunk's field is written by the
//!    density synthesizer, X slabs split across the worker pool
//! 2. **Meshing**: marching cubes over the completed field
//!
//! Stage 2 starts only after every worker of stage 1 has returned. Chunks of a
//! pass run one after another.

pub mod meshing;
pub mod populate;
pub mod process;
pub mod types;

pub use meshing::mesh_field;
pub use populate::populate_field;
pub use process::generate_chunk;
pub use types::{ChunkTimings, PassStats};
