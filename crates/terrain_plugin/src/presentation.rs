//! RenderBackend - interface to whatever draws the chunks.
//!
//! The core owns vertex data and placement. A backend receives vertex lists
//! to upload, per-frame draw calls, and release notices, and never calls back
//! into the core.
//!
//! ```text
//!   build / regenerate              every frame
//!   ──────────────────              ───────────
//!   release(coord)  (old grid)      begin_frame()
//!   upload(coord, vertices)         draw(coord, model, vertex_count)
//!                                     ... once per chunk
//! ```

use std::collections::HashMap;

use glam::Mat4;

use crate::types::{ChunkCoord, Vertex};

/// Sink for chunk geometry.
///
/// # Example
///
/// ```ignore
/// struct GlBackend { buffers: HashMap<ChunkCoord, GlBuffer> }
///
/// impl RenderBackend for GlBackend {
///   fn upload(&mut self, coord: ChunkCoord, vertices: &[Vertex]) {
///     self.buffers.entry(coord).or_default().write(vertices);
///   }
///   // ...
/// }
/// ```
pub trait RenderBackend {
  /// Called once per frame before any `draw`. Bind per-frame state
  /// (program, projection, view) here.
  fn begin_frame(&mut self) {}

  /// Store `vertices` for `coord`, replacing anything uploaded before.
  fn upload(&mut self, coord: ChunkCoord, vertices: &[Vertex]);

  /// Draw the first `vertex_count` uploaded vertices of `coord` with `model`.
  fn draw(&mut self, coord: ChunkCoord, model: Mat4, vertex_count: usize);

  /// Free whatever was uploaded for `coord`.
  fn release(&mut self, coord: ChunkCoord);
}

impl RenderBackend for Box<dyn RenderBackend> {
  fn begin_frame(&mut self) {
    (**self).begin_frame()
  }

  fn upload(&mut self, coord: ChunkCoord, vertices: &[Vertex]) {
    (**self).upload(coord, vertices)
  }

  fn draw(&mut self, coord: ChunkCoord, model: Mat4, vertex_count: usize) {
    (**self).draw(coord, model, vertex_count)
  }

  fn release(&mut self, coord: ChunkCoord) {
    (**self).release(coord)
  }
}

/// No-op implementation for headless operation.
pub struct NullBackend;

impl RenderBackend for NullBackend {
  fn upload(&mut self, _coord: ChunkCoord, _vertices: &[Vertex]) {}

  fn draw(&mut self, _coord: ChunkCoord, _model: Mat4, _vertex_count: usize) {}

  fn release(&mut self, _coord: ChunkCoord) {}
}

/// One recorded draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
  pub coord: ChunkCoord,
  pub model: Mat4,
  pub vertex_count: usize,
}

/// Backend that keeps buffer bookkeeping and counters instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingBackend {
  buffers: HashMap<ChunkCoord, Vec<Vertex>>,
  frame_draws: Vec<DrawCall>,
  pub frames: u64,
  pub uploads: u64,
  pub draws: u64,
  pub releases: u64,
  /// Draws that referenced a chunk with no live buffer.
  pub orphan_draws: u64,
}

impl RecordingBackend {
  pub fn new() -> Self {
    Self::default()
  }

  /// Chunks with a live buffer.
  pub fn live_buffers(&self) -> usize {
    self.buffers.len()
  }

  /// Uploaded vertices of `coord`.
  pub fn buffer(&self, coord: ChunkCoord) -> Option<&[Vertex]> {
    self.buffers.get(&coord).map(Vec::as_slice)
  }

  /// Total vertices across live buffers.
  pub fn resident_vertices(&self) -> usize {
    self.buffers.values().map(Vec::len).sum()
  }

  /// Draw calls since the last [`RecordingBackend::end_frame`].
  pub fn frame_draws(&self) -> &[DrawCall] {
    &self.frame_draws
  }

  /// Drain this frame's draw calls.
  pub fn end_frame(&mut self) -> Vec<DrawCall> {
    std::mem::take(&mut self.frame_draws)
  }
}

impl RenderBackend for RecordingBackend {
  fn begin_frame(&mut self) {
    self.frames += 1;
  }

  fn upload(&mut self, coord: ChunkCoord, vertices: &[Vertex]) {
    self.uploads += 1;
    self.buffers.insert(coord, vertices.to_vec());
  }

  fn draw(&mut self, coord: ChunkCoord, model: Mat4, vertex_count: usize) {
    self.draws += 1;
    if !self.buffers.contains_key(&coord) {
      self.orphan_draws += 1;
    }
    self.frame_draws.push(DrawCall {
      coord,
      model,
      vertex_count,
    });
  }

  fn release(&mut self, coord: ChunkCoord) {
    self.releases += 1;
    self.buffers.remove(&coord);
  }
}

#[cfg(test)]
#[path = "presentation_test.rs"]
mod presentation_test;
