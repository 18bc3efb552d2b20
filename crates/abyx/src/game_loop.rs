//! # Game Loop
//!
//! Wall-clock timing around [`Game::tick`](crate::Game::tick):
//!
//! ```text
//! begin_frame ─► (input) ─► tick ─► (submit draw list) ─► end_frame ─► pace
//!      │                                                     │
//!      └─ delta clamped to max_frame_delta                   └─ FPS logged every interval
//! ```

use std::time::{Duration, Instant};

use abyx_shared::GameConfig;
use tracing::{info, warn};

/// Target frame time for 60 FPS.
pub const TARGET_FRAME_TIME: Duration = Duration::from_micros(16_666);

/// Frames slower than this are logged.
pub const SLOW_FRAME_TIME: Duration = Duration::from_millis(33);

/// Clamps a raw frame delta into `[0, max]`.
#[inline]
#[must_use]
pub fn clamp_delta(raw: f32, max: f32) -> f32 {
    raw.clamp(0.0, max)
}

/// Loop timing settings.
#[derive(Clone, Debug, PartialEq)]
pub struct GameLoopConfig {
    /// Largest delta handed to a tick, seconds.
    pub max_frame_delta: f32,
    /// Sleep to this frame time after each tick; `None` runs flat out.
    pub target_frame_time: Option<Duration>,
    /// How often the FPS line is logged.
    pub fps_log_interval: Duration,
}

impl Default for GameLoopConfig {
    fn default() -> Self {
        Self {
            max_frame_delta: abyx_shared::constants::MAX_FRAME_DELTA,
            target_frame_time: Some(TARGET_FRAME_TIME),
            fps_log_interval: Duration::from_secs(1),
        }
    }
}

impl GameLoopConfig {
    /// Loop settings matching a game configuration.
    #[must_use]
    pub fn from_game_config(config: &GameConfig) -> Self {
        Self {
            max_frame_delta: config.max_frame_delta,
            ..Self::default()
        }
    }
}

/// Timing handed to one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    /// Frame number.
    pub index: u64,
    /// Clamped delta, seconds.
    pub dt: f32,
    /// Seconds since the loop started.
    pub now: f64,
}

/// Timing of one finished frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameStats {
    /// Frame number.
    pub frame: u64,
    /// Time spent in the tick, microseconds.
    pub tick_us: u64,
    /// Entities drawn.
    pub drawn: usize,
}

/// Drives frame timing.
pub struct GameLoop {
    config: GameLoopConfig,
    started: Instant,
    frame_started: Instant,
    last_raw_delta: f32,
    frame_count: u64,
    fps_seconds: f32,
    fps_frames: u32,
    stats: FrameStatsAccumulator,
}

impl GameLoop {
    /// Creates a loop; the first delta is measured from now.
    #[must_use]
    pub fn new(config: GameLoopConfig) -> Self {
        let now = Instant::now();
        Self {
            config,
            started: now,
            frame_started: now,
            last_raw_delta: 0.0,
            frame_count: 0,
            fps_seconds: 0.0,
            fps_frames: 0,
            stats: FrameStatsAccumulator::new(),
        }
    }

    /// Starts a frame and measures the delta since the previous one.
    #[must_use]
    pub fn begin_frame(&mut self) -> FrameTime {
        let now = Instant::now();
        let raw = now.duration_since(self.frame_started).as_secs_f32();
        self.frame_started = now;
        self.last_raw_delta = raw;

        FrameTime {
            index: self.frame_count,
            dt: clamp_delta(raw, self.config.max_frame_delta),
            now: now.duration_since(self.started).as_secs_f64(),
        }
    }

    /// Finishes a frame: records stats, logs FPS, sleeps if paced.
    pub fn end_frame(&mut self, stats: FrameStats) {
        self.frame_count += 1;
        self.stats.record(stats);

        if stats.tick_us > duration_us(SLOW_FRAME_TIME) {
            warn!(frame = stats.frame, tick_us = stats.tick_us, "slow frame");
        }

        self.fps_seconds += self.last_raw_delta;
        self.fps_frames += 1;
        if self.fps_seconds > self.config.fps_log_interval.as_secs_f32() {
            info!(fps = self.fps_frames, "fps");
            self.fps_seconds = 0.0;
            self.fps_frames = 0;
        }

        if let Some(target) = self.config.target_frame_time {
            let spent = self.frame_started.elapsed();
            if let Some(rest) = target.checked_sub(spent) {
                std::thread::sleep(rest);
            }
        }
    }

    /// Frames finished so far.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Accumulated statistics.
    #[must_use]
    pub fn stats(&self) -> &FrameStatsAccumulator {
        &self.stats
    }
}

fn duration_us(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// Running totals over recorded frames.
#[derive(Clone, Debug)]
pub struct FrameStatsAccumulator {
    /// Frames recorded.
    pub frames_recorded: u64,
    /// Sum of tick times.
    pub tick_us_sum: u64,
    /// Fastest tick.
    pub min_tick_us: u64,
    /// Slowest tick.
    pub max_tick_us: u64,
    /// Ticks longer than [`TARGET_FRAME_TIME`].
    pub frames_over_budget: u64,
}

impl FrameStatsAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames_recorded: 0,
            tick_us_sum: 0,
            min_tick_us: u64::MAX,
            max_tick_us: 0,
            frames_over_budget: 0,
        }
    }

    /// Records one frame.
    pub fn record(&mut self, stats: FrameStats) {
        self.frames_recorded += 1;
        self.tick_us_sum += stats.tick_us;
        self.min_tick_us = self.min_tick_us.min(stats.tick_us);
        self.max_tick_us = self.max_tick_us.max(stats.tick_us);
        if stats.tick_us > duration_us(TARGET_FRAME_TIME) {
            self.frames_over_budget += 1;
        }
    }

    /// Mean tick time in milliseconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn avg_tick_ms(&self) -> f64 {
        if self.frames_recorded == 0 {
            return 0.0;
        }
        (self.tick_us_sum as f64 / self.frames_recorded as f64) / 1000.0
    }

    /// Logs a one-line summary.
    pub fn log_summary(&self) {
        info!(
            frames = self.frames_recorded,
            avg_tick_ms = self.avg_tick_ms(),
            min_tick_us = self.min_tick_us,
            max_tick_us = self.max_tick_us,
            over_budget = self.frames_over_budget,
            "frame statistics"
        );
    }
}

impl Default for FrameStatsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
