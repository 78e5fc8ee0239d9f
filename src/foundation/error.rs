/// Convenience result type used across the crate.
pub type MotionResult<T> = Result<T, MotionError>;

/// Top-level error taxonomy used by constructors and the playback driver.
#[derive(thiserror::Error, Debug)]
pub enum MotionError {
    /// Rejected construction or combination parameters (durations, counts, delays).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Invalid playback/driver data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotionError {
    /// Build a [`MotionError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`MotionError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Reject durations that would poison `seq`/`par` time splitting.
pub(crate) fn check_duration(what: &str, duration: f64) -> MotionResult<f64> {
    if !duration.is_finite() || duration <= 0.0 {
        tracing::debug!(what, duration, "rejected animation duration");
        return Err(MotionError::configuration(format!(
            "{what} duration must be finite and > 0 (got {duration})"
        )));
    }
    Ok(duration)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
