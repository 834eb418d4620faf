//! Density synthesis: voxel coordinate to signed density.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  xi = (x + seed + chunk.x * stride) * frequency / chunk_size            │
//! │  zi = (z + seed + chunk.z * stride) * frequency / chunk_size            │
//! │  yi =  y                            * frequency / chunk_size            │
//! │                                                                         │
//! │  height  = fbm(xi, zi; seed)^exponent * height_scale      mountain      │
//! │  height += fbm(xi*0.2, zi*0.2; seed) * 5 + 5              plateau       │
//! │  density = (y - height)                                                 │
//! │          + max(fbm(xi*cf, yi*cf; zi*cf), 0) * intensity   cave          │
//! │  y < 4  => density = -1                                   floor         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Negative density is solid. The cave term is non-negative, so it only ever
//! pushes density towards air: it thins solid regions in narrow low-noise
//! bands rather than opening a connected cave network.

mod synthesizer;

pub use synthesizer::DensitySynthesizer;

use serde::Deserialize;

use crate::constants::CHUNK_SIZE;

/// Octave parameters of one fractal noise layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalLayer {
  pub octaves: u32,
  pub lacunarity: f32,
  pub persistence: f32,
}

impl FractalLayer {
  pub const fn new(octaves: u32, lacunarity: f32, persistence: f32) -> Self {
    Self {
      octaves,
      lacunarity,
      persistence,
    }
  }
}

impl Default for FractalLayer {
  fn default() -> Self {
    Self::new(10, 1.5, 0.6)
  }
}

/// Implements `layer()` for params structs carrying the three octave fields.
macro_rules! impl_fractal_layer {
  ($($ty:ty),*) => {
    $(
      impl $ty {
        #[inline]
        pub fn layer(&self) -> FractalLayer {
          FractalLayer::new(self.octaves, self.lacunarity, self.persistence)
        }
      }
    )*
  };
}

impl_fractal_layer!(MountainParams, PlateauParams, CaveParams);

/// Base height field.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MountainParams {
  pub octaves: u32,
  pub lacunarity: f32,
  pub persistence: f32,
  /// Shaping exponent applied to the noise before scaling.
  pub exponent: f32,
  pub height_scale: f32,
}

impl Default for MountainParams {
  fn default() -> Self {
    Self {
      octaves: 10,
      lacunarity: 1.5,
      persistence: 0.6,
      exponent: 1.0,
      height_scale: 102.0,
    }
  }
}

/// Low-frequency offset added to the base height.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlateauParams {
  pub enabled: bool,
  pub octaves: u32,
  pub lacunarity: f32,
  pub persistence: f32,
  /// Multiplier on the horizontal sample coordinates.
  pub scale: f32,
  pub amplitude: f32,
  pub bias: f32,
}

impl Default for PlateauParams {
  fn default() -> Self {
    Self {
      enabled: true,
      octaves: 3,
      lacunarity: 1.2,
      persistence: 0.2,
      scale: 0.2,
      amplitude: 5.0,
      bias: 5.0,
    }
  }
}

/// Additive cave term.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CaveParams {
  pub octaves: u32,
  pub lacunarity: f32,
  pub persistence: f32,
  pub frequency: f32,
  pub intensity: f32,
}

impl Default for CaveParams {
  fn default() -> Self {
    Self {
      octaves: 10,
      lacunarity: 1.5,
      persistence: 0.6,
      frequency: 10.0,
      intensity: 10.0,
    }
  }
}

/// Solid floor at the bottom of the world.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FloorParams {
  /// Samples with `y` strictly below this are forced to `density`.
  pub threshold: f32,
  pub density: f32,
}

impl Default for FloorParams {
  fn default() -> Self {
    Self {
      threshold: 4.0,
      density: -1.0,
    }
  }
}

/// All tunables of the density function.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DensityParams {
  pub frequency: f32,
  /// Divisor of the sample coordinates.
  pub chunk_size: f32,
  /// World units a chunk offset step shifts the sample coordinates by.
  pub offset_stride: f32,
  pub mountain: MountainParams,
  pub plateau: PlateauParams,
  pub cave: CaveParams,
  pub floor: FloorParams,
}

impl Default for DensityParams {
  fn default() -> Self {
    Self {
      frequency: 0.025,
      chunk_size: CHUNK_SIZE as f32,
      offset_stride: 8.0,
      mountain: MountainParams::default(),
      plateau: PlateauParams::default(),
      cave: CaveParams::default(),
      floor: FloorParams::default(),
    }
  }
}

impl DensityParams {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_frequency(mut self, frequency: f32) -> Self {
    self.frequency = frequency;
    self
  }

  pub fn with_plateau(mut self, enabled: bool) -> Self {
    self.plateau.enabled = enabled;
    self
  }

  pub fn with_cave_intensity(mut self, intensity: f32) -> Self {
    self.cave.intensity = intensity;
    self
  }

  pub fn with_floor(mut self, threshold: f32, density: f32) -> Self {
    self.floor = FloorParams { threshold, density };
    self
  }

  /// Check the parameters can drive the synthesizer.
  pub fn validate(&self) -> Result<(), String> {
    if !(self.frequency > 0.0) {
      return Err(format!("density.frequency must be positive, got {}", self.frequency));
    }
    if !(self.chunk_size > 0.0) {
      return Err(format!("density.chunk_size must be positive, got {}", self.chunk_size));
    }
    if self.mountain.octaves == 0 {
      return Err("density.mountain.octaves must be at least 1".to_string());
    }
    if self.cave.octaves == 0 {
      return Err("density.cave.octaves must be at least 1".to_string());
    }
    if self.plateau.enabled && self.plateau.octaves == 0 {
      return Err("density.plateau.octaves must be at least 1 when enabled".to_string());
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "density_test.rs"]
mod density_test;
