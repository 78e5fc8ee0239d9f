use crate::{
    animation::anim::Animation,
    foundation::core::{Fps, FrameIndex},
    foundation::error::{MotionError, MotionResult, check_duration},
};

/// Frame-based driver that maps frames onto animation progress.
///
/// Progress runs from `0.0` on the first frame to `1.0` on the last, non-decreasing. The
/// driver never sleeps or reads the wall clock; callers that pace real time do so around
/// [`Playback::frames`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Playback {
    fps: Fps,
    frame_count: u64,
}

impl Playback {
    /// Upper bound on frames per playback; ten million is about 46 hours at 60 fps.
    pub const MAX_FRAMES: u64 = 10_000_000;

    /// Drive `frame_count` frames; at least one and at most [`Playback::MAX_FRAMES`].
    pub fn new(fps: Fps, frame_count: u64) -> MotionResult<Self> {
        if frame_count == 0 {
            return Err(MotionError::validation("Playback frame_count must be > 0"));
        }
        if frame_count > Self::MAX_FRAMES {
            tracing::debug!(frame_count, "rejected playback length");
            return Err(MotionError::validation(format!(
                "Playback frame_count must be <= {} (got {frame_count})",
                Self::MAX_FRAMES
            )));
        }
        Ok(Self { fps, frame_count })
    }

    /// Enough frames to cover `duration_ms` at `fps`, both endpoints included.
    pub fn for_duration(fps: Fps, duration_ms: f64) -> MotionResult<Self> {
        let duration_ms = check_duration("playback", duration_ms)?;
        let frames = fps.secs_to_frames_ceil(duration_ms / 1000.0);
        Self::new(fps, frames.saturating_add(1))
    }

    /// Cover an animation whose duration is in milliseconds. Degenerate variants get a single
    /// frame.
    pub fn for_animation<T>(fps: Fps, animation: &Animation<T>) -> MotionResult<Self> {
        match animation.duration() {
            Some(ms) => Self::for_duration(fps, ms),
            None => Self::new(fps, 1),
        }
    }

    /// Frame rate used to derive the frame count.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Number of frames driven.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Progress at `frame`, clamped to `[0, 1]`.
    pub fn progress_at(&self, frame: FrameIndex) -> f64 {
        if self.frame_count <= 1 {
            return 1.0;
        }
        let last = (self.frame_count - 1) as f64;
        (frame.0 as f64 / last).clamp(0.0, 1.0)
    }

    /// Wall-clock offset of `frame` from the start, in seconds.
    pub fn time_at(&self, frame: FrameIndex) -> f64 {
        self.fps.frames_to_secs(frame.0)
    }

    /// Every frame with its progress, in order.
    pub fn frames(&self) -> impl Iterator<Item = (FrameIndex, f64)> + '_ {
        (0..self.frame_count).map(|f| {
            let frame = FrameIndex(f);
            (frame, self.progress_at(frame))
        })
    }

    /// Render `animation` once per frame. Returns the number of frames driven.
    #[tracing::instrument(level = "debug", skip_all, fields(frames = self.frame_count))]
    pub fn play<T>(&self, animation: &Animation<T>) -> u64 {
        tracing::debug!(fps = self.fps.as_f64(), "playback start");
        for (frame, progress) in self.frames() {
            tracing::trace!(frame = frame.0, progress, "render");
            animation.render(progress);
        }
        self.frame_count
    }

    /// Sample `animation` once per frame.
    pub fn sample_all<T>(&self, animation: &Animation<T>) -> Vec<Option<T>> {
        self.frames()
            .map(|(_, progress)| animation.sample(progress))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/driver.rs"]
mod tests;
