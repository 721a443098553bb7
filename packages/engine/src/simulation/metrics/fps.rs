use std::collections::VecDeque;

/// FPS is sampled over windows of at least this length (ms)
pub const FPS_SAMPLE_INTERVAL_MS: f64 = 500.0;
/// Number of samples kept for averaging
pub const FPS_HISTORY_LEN: usize = 20;
/// Frame rate that counts as "full speed" for scoring
const TARGET_FPS: f64 = 60.0;
const MAX_SCORE: u32 = 100;

/// Traffic-light classification used by the stats panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum FpsRating {
    Bad = 0,
    Medium = 1,
    Good = 2,
}

impl FpsRating {
    pub fn from_fps(fps: u32) -> Self {
        if fps >= 50 {
            FpsRating::Good
        } else if fps >= 30 {
            FpsRating::Medium
        } else {
            FpsRating::Bad
        }
    }
}

/// Rolling frame-rate tracker
#[derive(Clone, Debug, Default)]
pub struct FpsTracker {
    frames: u32,
    window_start_ms: f64,
    current: u32,
    history: VecDeque<u32>,
}

impl FpsTracker {
    pub fn new() -> Self {
        Self {
            history: VecDeque::with_capacity(FPS_HISTORY_LEN),
            ..Default::default()
        }
    }

    /// Start a fresh sampling window at `now_ms`, dropping all history
    pub fn reset(&mut self, now_ms: f64) {
        self.frames = 0;
        self.window_start_ms = now_ms;
        self.current = 0;
        self.history.clear();
    }

    /// Count one frame. Returns the new sample when a window closes.
    pub fn record_frame(&mut self, now_ms: f64) -> Option<u32> {
        self.frames += 1;
        let window = now_ms - self.window_start_ms;
        if window < FPS_SAMPLE_INTERVAL_MS {
            return None;
        }

        let fps = (self.frames as f64 / (window / 1000.0)).round() as u32;
        self.frames = 0;
        self.window_start_ms = now_ms;
        self.current = fps;

        self.history.push_back(fps);
        if self.history.len() > FPS_HISTORY_LEN {
            self.history.pop_front();
        }
        Some(fps)
    }

    /// Latest sample (0 before the first window closes)
    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn rating(&self) -> FpsRating {
        FpsRating::from_fps(self.current)
    }

    pub fn samples(&self) -> usize {
        self.history.len()
    }

    pub fn average(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        self.history.iter().map(|&f| f as f64).sum::<f64>() / self.history.len() as f64
    }

    pub fn minimum(&self) -> f64 {
        self.history.iter().copied().min().unwrap_or(0) as f64
    }
}

/// Benchmark score: average FPS relative to 60, boosted by the configured load.
///
/// Pure function of its inputs; capped at 100.
pub fn compute_score(avg_fps: f64, object_count: u32, physics_complexity: u8, visual_complexity: u8) -> u32 {
    let raw = (avg_fps / TARGET_FPS)
        * 100.0
        * (1.0 + object_count as f64 / 2000.0)
        * (1.0 + physics_complexity as f64 / 200.0)
        * (1.0 + visual_complexity as f64 / 200.0);
    if !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    (raw.round() as u32).min(MAX_SCORE)
}
