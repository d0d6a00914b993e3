use crate::{ConfigError, Size};
use std::time::Duration;

pub const DEFAULT_SIZE: Size = Size::new(25, 25);
pub const DEFAULT_FPS: f64 = 10.0;
/// Largest accepted width or height
pub const MAX_EXTENT: u32 = 1 << 16;

/// User-adjustable simulation settings
///
/// Every constructor and setter validates its input, so a `Settings` value
/// always holds a non-empty size and a positive, finite play speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    size: Size,
    fps: f64,
    threads: usize,
}

impl Settings {
    pub fn new(size: Size, fps: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            size: validate_size(size)?,
            fps: validate_fps(fps)?,
            threads: 1,
        })
    }

    /// Sets the number of threads used to evaluate a generation (at least 1)
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }
    #[inline]
    pub fn fps(&self) -> f64 {
        self.fps
    }
    #[inline]
    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn set_size(&mut self, size: Size) -> Result<(), ConfigError> {
        self.size = validate_size(size)?;
        Ok(())
    }
    pub fn set_fps(&mut self, fps: f64) -> Result<(), ConfigError> {
        self.fps = validate_fps(fps)?;
        Ok(())
    }

    /// Minimum time between two generations in Play mode
    pub fn frame_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.fps.recip()).unwrap_or(Duration::MAX)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            fps: DEFAULT_FPS,
            threads: 1,
        }
    }
}

fn validate_size(size: Size) -> Result<Size, ConfigError> {
    let Size { width, height } = size;
    if size.is_empty() {
        Err(ConfigError::EmptySize { width, height })
    } else if width > MAX_EXTENT || height > MAX_EXTENT {
        Err(ConfigError::SizeTooLarge { width, height })
    } else {
        Ok(size)
    }
}

fn validate_fps(fps: f64) -> Result<f64, ConfigError> {
    if fps.is_finite() && fps > 0.0 {
        Ok(fps)
    } else {
        Err(ConfigError::InvalidFps(fps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();

        assert_eq!(settings.size(), Size::new(25, 25));
        assert_eq!(settings.frame_interval(), Duration::from_millis(100));
        assert_eq!(settings.threads(), 1);
    }

    #[test]
    fn rejects_empty_size() {
        assert_eq!(
            Settings::new(Size::new(0, 10), 5.0),
            Err(ConfigError::EmptySize {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn rejects_huge_size() {
        assert!(matches!(
            Settings::new(Size::new(10, MAX_EXTENT + 1), 5.0),
            Err(ConfigError::SizeTooLarge { .. })
        ));
    }

    #[test]
    fn rejects_bad_fps() {
        for fps in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(Settings::new(DEFAULT_SIZE, fps).is_err(), "fps {fps}");
        }
    }

    #[test]
    fn failed_setter_keeps_old_value() {
        let mut settings = Settings::default();

        assert!(settings.set_fps(0.0).is_err());
        assert_eq!(settings.fps(), DEFAULT_FPS);
        assert!(settings.set_size(Size::new(3, 0)).is_err());
        assert_eq!(settings.size(), DEFAULT_SIZE);
    }

    #[test]
    fn threads_are_at_least_one() {
        assert_eq!(Settings::default().with_threads(0).threads(), 1);
        assert_eq!(Settings::default().with_threads(4).threads(), 4);
    }
}
