use std::panic::{catch_unwind, AssertUnwindSafe};

use glam::{Mat4, Vec3};

use super::*;
use crate::config::GridConfig;
use crate::field::FieldDims;
use crate::presentation::RecordingBackend;
use crate::types::Vertex;

fn small_config(workers: usize) -> TerrainConfig {
  TerrainConfig::default()
    .with_chunk_dims(FieldDims::new(8, 128, 8))
    .with_grid(GridConfig::square(1))
    .with_workers(workers)
}

/// Backend that panics on the first upload.
struct PanickingBackend;

impl RenderBackend for PanickingBackend {
  fn upload(&mut self, _coord: ChunkCoord, _vertices: &[Vertex]) {
    panic!("upload failed");
  }

  fn draw(&mut self, _coord: ChunkCoord, _model: Mat4, _vertex_count: usize) {}

  fn release(&mut self, _coord: ChunkCoord) {}
}

/// Backend that logs the order of frame calls.
#[derive(Default)]
struct FrameOrderBackend {
  events: Vec<&'static str>,
}

impl RenderBackend for FrameOrderBackend {
  fn begin_frame(&mut self) {
    self.events.push("begin");
  }

  fn upload(&mut self, _coord: ChunkCoord, _vertices: &[Vertex]) {}

  fn draw(&mut self, _coord: ChunkCoord, _model: Mat4, _vertex_count: usize) {
    self.events.push("draw");
  }

  fn release(&mut self, _coord: ChunkCoord) {}
}

#[test]
fn test_new_world_is_idle() {
  let world = TerrainWorld::new(small_config(2)).unwrap();
  assert_eq!(world.state(), GridState::Idle);
  assert!(world.chunks().is_empty());
  assert!(world.context().is_none());
  assert_eq!(world.workers(), 2);
}

#[test]
fn test_invalid_config_rejected() {
  let result = TerrainWorld::new(small_config(0));
  assert!(matches!(result, Err(TerrainError::InvalidConfig(_))));
}

#[test]
fn test_default_grid_coords() {
  let world = TerrainWorld::new(TerrainConfig::default().with_workers(1)).unwrap();
  let coords: Vec<_> = world.coords().collect();
  assert_eq!(coords.len(), 400);
  assert_eq!(coords[0], ChunkCoord::new(-10, -10));
  assert_eq!(coords[1], ChunkCoord::new(-10, -9));
  assert_eq!(coords[399], ChunkCoord::new(9, 9));
}

#[test]
fn test_build_all_uploads_every_chunk() {
  let mut world = TerrainWorld::new(small_config(2)).unwrap();
  let mut backend = RecordingBackend::new();

  let stats = world.build_all(WorldSeed::new(1023.322), &mut backend).unwrap();

  assert_eq!(world.state(), GridState::Ready);
  assert_eq!(stats.chunks, 4);
  assert_eq!(stats.generation, 1);
  assert_eq!(backend.uploads, 4);
  assert_eq!(backend.live_buffers(), 4);

  let coords: Vec<_> = world.chunks().iter().map(|c| c.coord).collect();
  assert_eq!(
    coords,
    vec![
      ChunkCoord::new(-1, -1),
      ChunkCoord::new(-1, 0),
      ChunkCoord::new(0, -1),
      ChunkCoord::new(0, 0),
    ]
  );

  let total: usize = world.chunks().iter().map(|c| c.vertex_count()).sum();
  assert_eq!(stats.vertices, total);
  assert_eq!(backend.resident_vertices(), total);
  for chunk in world.chunks() {
    assert_eq!(backend.buffer(chunk.coord), Some(chunk.vertices()));
    assert_eq!(chunk.generation, 1);
  }
}

#[test]
fn test_regenerate_all_replaces_grid() {
  let mut world = TerrainWorld::new(small_config(2)).unwrap();
  let mut backend = RecordingBackend::new();

  world.build_all(WorldSeed::new(10.23322), &mut backend).unwrap();
  let stats = world.regenerate_all(WorldSeed::new(5000.0), &mut backend).unwrap();

  assert_eq!(stats.generation, 2);
  assert_eq!(world.chunks().len(), 4);
  assert_eq!(backend.releases, 4);
  assert_eq!(backend.uploads, 8);
  assert_eq!(backend.live_buffers(), 4);
  assert_eq!(world.context().map(|c| c.seed), Some(WorldSeed::new(5000.0)));
  assert!(world.chunks().iter().all(|c| c.generation == 2));
}

#[test]
fn test_present_draws_each_chunk() {
  let mut world = TerrainWorld::new(small_config(1)).unwrap();
  let mut backend = RecordingBackend::new();
  world.build_all(WorldSeed::new(0.0), &mut backend).unwrap();

  world.present(&mut backend);
  let draws = backend.end_frame();

  assert_eq!(backend.frames, 1, "Frame not opened before draws");
  assert_eq!(draws.len(), 4);
  assert_eq!(backend.orphan_draws, 0);
  for (draw, chunk) in draws.iter().zip(world.chunks()) {
    assert_eq!(draw.coord, chunk.coord);
    assert_eq!(draw.vertex_count, chunk.vertex_count());
    let expected = Vec3::new(chunk.coord.x as f32 * 8.0, -10.0, chunk.coord.z as f32 * 8.0);
    assert_eq!(draw.model, Mat4::from_translation(expected));
  }
}

#[test]
fn test_same_seed_same_terrain_any_worker_count() {
  let seed = WorldSeed::new(2046.644);
  let mut a = TerrainWorld::new(small_config(1)).unwrap();
  let mut b = TerrainWorld::new(small_config(4)).unwrap();
  a.build_all(seed, &mut RecordingBackend::new()).unwrap();
  b.build_all(seed, &mut RecordingBackend::new()).unwrap();

  for (ca, cb) in a.chunks().iter().zip(b.chunks()) {
    assert_eq!(ca.field, cb.field);
    assert_eq!(ca.mesh.vertices, cb.mesh.vertices);
  }
}

#[test]
fn test_trigger_regenerates_once() {
  let mut world = TerrainWorld::new(small_config(2)).unwrap();
  let mut backend = RecordingBackend::new();
  world.build_all(WorldSeed::new(1.0), &mut backend).unwrap();

  assert!(world.poll_trigger(&mut backend).unwrap().is_none());

  let trigger = world.trigger();
  std::thread::spawn(move || trigger.request()).join().unwrap();

  let stats = world.poll_trigger(&mut backend).unwrap();
  assert_eq!(stats.map(|s| s.generation), Some(2));
  assert!(world.poll_trigger(&mut backend).unwrap().is_none());
}

#[test]
fn test_trigger_take_clears() {
  let trigger = RegenerationTrigger::new();
  assert!(!trigger.take());
  trigger.clone().request();
  assert!(trigger.is_requested());
  assert!(trigger.take());
  assert!(!trigger.is_requested());
}

#[test]
fn test_request_during_generation_rejected() {
  let mut world = TerrainWorld::new(small_config(1)).unwrap();

  let result = catch_unwind(AssertUnwindSafe(|| {
    let _ = world.build_all(WorldSeed::new(3.0), &mut PanickingBackend);
  }));
  assert!(result.is_err());
  assert_eq!(world.state(), GridState::Generating);

  let mut backend = RecordingBackend::new();
  assert!(matches!(
    world.build_all(WorldSeed::new(3.0), &mut backend),
    Err(TerrainError::GenerationInProgress)
  ));

  world.clear(&mut backend);
  assert_eq!(world.state(), GridState::Idle);
  assert!(world.build_all(WorldSeed::new(3.0), &mut backend).is_ok());
}

#[test]
fn test_clear_releases_everything() {
  let mut world = TerrainWorld::new(small_config(2)).unwrap();
  let mut backend = RecordingBackend::new();
  world.build_all(WorldSeed::new(9.0), &mut backend).unwrap();

  world.clear(&mut backend);

  assert_eq!(world.state(), GridState::Idle);
  assert!(world.chunks().is_empty());
  assert_eq!(backend.live_buffers(), 0);
}

#[test]
fn test_chunk_lookup() {
  let mut world = TerrainWorld::new(small_config(2)).unwrap();
  world.build_all(WorldSeed::new(9.0), &mut RecordingBackend::new()).unwrap();
  assert!(world.chunk(ChunkCoord::new(0, -1)).is_some());
  assert!(world.chunk(ChunkCoord::new(1, 0)).is_none());
}

#[test]
fn test_present_opens_frame_before_draws() {
  let mut world = TerrainWorld::new(small_config(1)).unwrap();
  let mut backend = FrameOrderBackend::default();
  world.build_all(WorldSeed::new(0.0), &mut backend).unwrap();

  world.present(&mut backend);
  world.present(&mut backend);

  let frame = ["begin", "draw", "draw", "draw", "draw"];
  assert_eq!(backend.events, [frame, frame].concat());
}
