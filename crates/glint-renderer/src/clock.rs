//! Monotonic animation clock and rolling frame statistics.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Elapsed-time source for the frame driver.
///
/// Starts when created and is never reset.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds since the clock was created.
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages over the last `capacity` frame durations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub fps: f64,
    pub mean_frame_ms: f64,
    pub samples: usize,
}

/// Rolling window of frame durations, reported periodically at `debug`.
pub struct FrameTimer {
    durations: VecDeque<Duration>,
    capacity: usize,
    last_frame: Option<Instant>,
    last_report: Option<Instant>,
    report_interval: Duration,
}

impl FrameTimer {
    pub fn new(capacity: usize, report_interval: Duration) -> Self {
        Self {
            durations: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            last_frame: None,
            last_report: None,
            report_interval,
        }
    }

    /// Mark a frame boundary at `now`; the first call only starts timing.
    pub fn frame(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            self.record(now.saturating_duration_since(last));
        }
        self.last_frame = Some(now);
    }

    pub fn record(&mut self, duration: Duration) {
        if self.durations.len() == self.capacity {
            self.durations.pop_front();
        }
        self.durations.push_back(duration);
    }

    pub fn stats(&self) -> FrameStats {
        let samples = self.durations.len();
        let total: f64 = self.durations.iter().map(Duration::as_secs_f64).sum();
        if samples == 0 || total <= 0.0 {
            return FrameStats {
                fps: 0.0,
                mean_frame_ms: 0.0,
                samples,
            };
        }
        FrameStats {
            fps: samples as f64 / total,
            mean_frame_ms: total / samples as f64 * 1000.0,
            samples,
        }
    }

    /// Returns stats once per report interval, `None` otherwise.
    pub fn report_due(&mut self, now: Instant) -> Option<FrameStats> {
        match self.last_report {
            None => {
                self.last_report = Some(now);
                None
            }
            Some(last) if now.saturating_duration_since(last) >= self.report_interval => {
                self.last_report = Some(now);
                Some(self.stats())
            }
            Some(_) => None,
        }
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new(120, Duration::from_secs(5))
    }
}
