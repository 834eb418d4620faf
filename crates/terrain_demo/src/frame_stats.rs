//! Per-second frame counter for the demo loop.

use web_time::{Duration, Instant};

/// Counts frames and reports once per elapsed window.
#[derive(Debug)]
pub struct FrameStats {
  window: Duration,
  window_start: Instant,
  frames: u32,
  draws: u64,
  total_frames: u64,
}

/// One closed reporting window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
  pub frames: u32,
  pub draws: u64,
  pub seconds: f64,
}

impl FrameReport {
  pub fn fps(&self) -> f64 {
    if self.seconds > 0.0 {
      self.frames as f64 / self.seconds
    } else {
      0.0
    }
  }
}

impl FrameStats {
  pub fn new(now: Instant) -> Self {
    Self::with_window(now, Duration::from_secs(1))
  }

  pub fn with_window(now: Instant, window: Duration) -> Self {
    Self {
      window,
      window_start: now,
      frames: 0,
      draws: 0,
      total_frames: 0,
    }
  }

  /// Count a frame that issued `draws` draw calls. Returns the closed
  /// window when at least one window length has passed since it opened.
  pub fn frame(&mut self, now: Instant, draws: usize) -> Option<FrameReport> {
    self.frames += 1;
    self.total_frames += 1;
    self.draws += draws as u64;

    let elapsed = now.saturating_duration_since(self.window_start);
    if elapsed < self.window {
      return None;
    }

    let report = FrameReport {
      frames: self.frames,
      draws: self.draws,
      seconds: elapsed.as_secs_f64(),
    };
    self.window_start = now;
    self.frames = 0;
    self.draws = 0;
    Some(report)
  }

  pub fn total_frames(&self) -> u64 {
    self.total_frames
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_reports_once_per_window() {
    let start = Instant::now();
    let mut stats = FrameStats::new(start);

    for i in 1..60 {
      let now = start + Duration::from_millis(i * 16);
      assert!(stats.frame(now, 4).is_none(), "Early report at frame {}", i);
    }

    let report = stats.frame(start + Duration::from_millis(1000), 4).unwrap();
    assert_eq!(report.frames, 60);
    assert_eq!(report.draws, 240);
    assert!((report.fps() - 60.0).abs() < 1e-9);

    // Window restarts
    assert!(stats.frame(start + Duration::from_millis(1016), 4).is_none());
    assert_eq!(stats.total_frames(), 61);
  }
}
