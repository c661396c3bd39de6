//! Replay configuration: interpolation windows, cursor threshold and spline tension.
//!
//! # Example
//!
//! ```rust
//! use skytrace::config::ReplayConfig;
//!
//! let config = ReplayConfig::default()
//!     .with_interpolation_window(5_000)
//!     .with_tension(0.25);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{ReplayError, Result};

/// Default interpolation window: 2 seconds.
///
/// Only samples within `[t - window, t + window]` support the interpolation at
/// `t`; anything further away is considered inactive.
pub const DEFAULT_INTERPOLATION_WINDOW: i64 = 2_000;

/// An interpolation window that considers every sample, regardless of distance.
pub const INFINITE_INTERPOLATION_WINDOW: i64 = i64::MAX;

/// Forward distance beyond which the cursor switches from linear to binary search: 3 seconds.
pub const BINARY_SEARCH_THRESHOLD: i64 = 3_000;

/// Default Hermite tension (plain Catmull-Rom).
pub const DEFAULT_TENSION: f64 = 0.0;

/// Maximum time distance a sample may have from the query timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Samples further away than the given milliseconds are ignored.
    Finite(i64),
    /// Every sample is eligible (sparse or imported data).
    Infinite,
}

impl Window {
    /// Returns the window size in milliseconds.
    pub fn millis(self) -> i64 {
        match self {
            Window::Finite(ms) => ms,
            Window::Infinite => INFINITE_INTERPOLATION_WINDOW,
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Window::Finite(DEFAULT_INTERPOLATION_WINDOW)
    }
}

/// Configuration shared by all channels of an aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayConfig {
    /// Finite interpolation window in milliseconds.
    ///
    /// Applied to ordinary playback and to the export of densely sampled
    /// channels. Default: 2000 ms.
    pub interpolation_window: i64,

    /// Forward jump, in milliseconds, from the cursor sample that makes the
    /// cursor fall back to binary search. Default: 3000 ms.
    pub binary_search_threshold: i64,

    /// Hermite tension in [-1, 1]: 1 is high, 0 normal, -1 low. Default: 0.
    pub tension: f64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            interpolation_window: DEFAULT_INTERPOLATION_WINDOW,
            binary_search_threshold: BINARY_SEARCH_THRESHOLD,
            tension: DEFAULT_TENSION,
        }
    }
}

impl ReplayConfig {
    /// Sets a custom finite interpolation window.
    pub fn with_interpolation_window(mut self, window: i64) -> Self {
        self.interpolation_window = window;
        self
    }

    /// Sets a custom binary search threshold.
    pub fn with_binary_search_threshold(mut self, threshold: i64) -> Self {
        self.binary_search_threshold = threshold;
        self
    }

    /// Sets a custom Hermite tension.
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = tension;
        self
    }

    /// Returns the finite window of this configuration.
    pub fn finite_window(&self) -> Window {
        Window::Finite(self.interpolation_window)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ReplayError::InvalidConfig` if the window or threshold is
    /// negative, or if the tension is not a finite value in [-1, 1].
    pub fn validate(&self) -> Result<()> {
        if self.interpolation_window < 0 {
            return Err(ReplayError::InvalidConfig(format!(
                "interpolation window must not be negative, got {}",
                self.interpolation_window
            )));
        }
        if self.binary_search_threshold < 0 {
            return Err(ReplayError::InvalidConfig(format!(
                "binary search threshold must not be negative, got {}",
                self.binary_search_threshold
            )));
        }
        if !self.tension.is_finite() || !(-1.0..=1.0).contains(&self.tension) {
            return Err(ReplayError::InvalidConfig(format!(
                "tension must be within [-1, 1], got {}",
                self.tension
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReplayConfig::default();
        assert_eq!(config.interpolation_window, 2_000);
        assert_eq!(config.binary_search_threshold, 3_000);
        assert_eq!(config.tension, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = ReplayConfig::default()
            .with_interpolation_window(500)
            .with_binary_search_threshold(100)
            .with_tension(-0.5);
        assert_eq!(config.finite_window(), Window::Finite(500));
        assert_eq!(config.binary_search_threshold, 100);
        assert_eq!(config.tension, -0.5);
    }

    #[test]
    fn test_validate_rejects_invalid_values() {
        let negative_window = ReplayConfig::default().with_interpolation_window(-1);
        assert!(matches!(
            negative_window.validate(),
            Err(ReplayError::InvalidConfig(_))
        ));

        let negative_threshold = ReplayConfig::default().with_binary_search_threshold(-1);
        assert!(negative_threshold.validate().is_err());

        let high_tension = ReplayConfig::default().with_tension(1.5);
        assert!(high_tension.validate().is_err());

        let nan_tension = ReplayConfig::default().with_tension(f64::NAN);
        assert!(nan_tension.validate().is_err());
    }

    #[test]
    fn test_window_millis() {
        assert_eq!(Window::Finite(42).millis(), 42);
        assert_eq!(Window::Infinite.millis(), i64::MAX);
        assert_eq!(Window::default(), Window::Finite(DEFAULT_INTERPOLATION_WINDOW));
    }
}
