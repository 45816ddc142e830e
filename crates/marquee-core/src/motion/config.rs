//! Validated motion parameters

use std::time::Duration;

use crate::{Error, Result};

/// Motion configuration for one ticker
///
/// Construct with [`MotionConfig::new`]; an invalid scroll period never makes
/// it into a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// Seconds to traverse one full track
    scroll_period_secs: f64,
    /// Quiet period before autoplay resumes; `None` disables idle resume
    idle_timeout: Option<Duration>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            scroll_period_secs: 30.0,
            idle_timeout: Some(Duration::from_secs(3)),
        }
    }
}

impl MotionConfig {
    /// Build a configuration from a scroll period and an idle timeout in seconds
    ///
    /// Fails when the period is zero, negative or not finite. An idle timeout
    /// of zero or less disables idle resume.
    pub fn new(scroll_period_secs: f64, idle_timeout_secs: f64) -> Result<Self> {
        Ok(Self {
            scroll_period_secs: validate_period(scroll_period_secs)?,
            idle_timeout: idle_timeout_from_secs(idle_timeout_secs),
        })
    }

    #[inline]
    pub fn scroll_period_secs(&self) -> f64 {
        self.scroll_period_secs
    }

    #[inline]
    pub fn idle_timeout(&self) -> Option<Duration> {
        self.idle_timeout
    }

    /// Distance per second for a track of the given length
    #[inline]
    pub fn speed_for(&self, track_length: f64) -> f64 {
        track_length / self.scroll_period_secs
    }

    pub(crate) fn set_scroll_period(&mut self, secs: f64) -> Result<()> {
        self.scroll_period_secs = validate_period(secs)?;
        Ok(())
    }

    pub(crate) fn set_idle_timeout(&mut self, secs: f64) {
        self.idle_timeout = idle_timeout_from_secs(secs);
    }
}

fn validate_period(secs: f64) -> Result<f64> {
    if secs.is_finite() && secs > 0.0 {
        Ok(secs)
    } else {
        Err(Error::Config(format!(
            "scroll period must be a positive number of seconds, got {}",
            secs
        )))
    }
}

fn idle_timeout_from_secs(secs: f64) -> Option<Duration> {
    if secs.is_finite() && secs > 0.0 {
        Some(Duration::from_secs_f64(secs))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_period() {
        assert!(MotionConfig::new(0.0, 3.0).is_err());
        assert!(MotionConfig::new(-5.0, 3.0).is_err());
        assert!(MotionConfig::new(f64::NAN, 3.0).is_err());
        assert!(MotionConfig::new(f64::INFINITY, 3.0).is_err());
    }

    #[test]
    fn test_idle_timeout_disabled() {
        assert!(MotionConfig::new(10.0, 0.0).unwrap().idle_timeout().is_none());
        assert!(MotionConfig::new(10.0, -1.0).unwrap().idle_timeout().is_none());
        assert_eq!(
            MotionConfig::new(10.0, 5.0).unwrap().idle_timeout(),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn test_speed_for() {
        let config = MotionConfig::new(100.0, 5.0).unwrap();
        assert!((config.speed_for(1000.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_failed_update_keeps_previous_period() {
        let mut config = MotionConfig::new(20.0, 5.0).unwrap();
        assert!(config.set_scroll_period(0.0).is_err());
        assert_eq!(config.scroll_period_secs(), 20.0);
    }
}
