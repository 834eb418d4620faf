//! Edge crossing table for marching cubes.
//!
//! Maps an 8-bit cube configuration to a 12-bit mask of the edges whose
//! endpoints straddle the isolevel.
//!
//! # Edge Layout
//!
//! ```text
//!         7───6───6          Edges 0-3:  bottom face (Z=0) ring
//!        /│      /│          Edges 4-7:  top face (Z=1) ring
//!      11 │    10 │          Edges 8-11: Z-parallel pillars
//!      /  7    /  5
//!     3───2───2   │
//!     │   4───4───5
//!     3  /    1  /
//!     │ 8     │ 9
//!     │/      │/
//!     0───0───1
//! ```
//!
//! Corner numbering is the one in [`crate::constants`]: corner 3 sits above
//! corner 0 on Y, corner 4 behind it on Z.
//!
//! # Usage
//!
//! ```text
//! Configuration: 0b00000001 (corner 0 below the isolevel)
//! Edge mask:     0x109      (edges 0, 3 and 8 cross)
//! ```

use crate::constants::CORNER_OFFSETS;

/// Edge endpoint corner indices.
pub const EDGE_CORNERS: [[u8; 2]; 12] = [
  [0, 1], // Edge 0:  X axis at Y=0, Z=0
  [1, 2], // Edge 1:  Y axis at X=1, Z=0
  [2, 3], // Edge 2:  X axis at Y=1, Z=0
  [3, 0], // Edge 3:  Y axis at X=0, Z=0
  [4, 5], // Edge 4:  X axis at Y=0, Z=1
  [5, 6], // Edge 5:  Y axis at X=1, Z=1
  [6, 7], // Edge 6:  X axis at Y=1, Z=1
  [7, 4], // Edge 7:  Y axis at X=0, Z=1
  [0, 4], // Edge 8:  Z axis at X=0, Y=0
  [1, 5], // Edge 9:  Z axis at X=1, Y=0
  [2, 6], // Edge 10: Z axis at X=1, Y=1
  [3, 7], // Edge 11: Z axis at X=0, Y=1
];

/// Precomputed edge table.
/// Index: cube configuration (bit i set when corner i is below the isolevel)
/// Value: 12-bit edge mask (which edges have crossings)
pub const EDGE_TABLE: [u16; 256] = generate_edge_table();

/// Generate the edge table at compile time.
const fn generate_edge_table() -> [u16; 256] {
  let mut table = [0u16; 256];
  let mut config = 0usize;

  while config < 256 {
    let mut edge_mask = 0u16;
    let mut edge = 0;

    while edge < 12 {
      let c0 = EDGE_CORNERS[edge][0] as usize;
      let c1 = EDGE_CORNERS[edge][1] as usize;

      // Crossing when exactly one endpoint is inside
      if (config >> c0) & 1 != (config >> c1) & 1 {
        edge_mask |= 1 << edge;
      }

      edge += 1;
    }

    table[config] = edge_mask;
    config += 1;
  }

  table
}

/// Get corner position within unit cube.
#[inline(always)]
pub const fn corner_position(corner: u8) -> [f32; 3] {
  let offset = CORNER_OFFSETS[corner as usize];
  [offset[0] as f32, offset[1] as f32, offset[2] as f32]
}

#[cfg(test)]
#[path = "edge_table_test.rs"]
mod edge_table_test;
