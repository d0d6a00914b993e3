use std::fmt;

/// A rejected configuration value
///
/// The engine itself never fails; these errors are raised where settings
/// enter the system so that bounds are never computed from an unusable size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Width or height is zero
    EmptySize { width: u32, height: u32 },
    /// Width or height exceeds [`crate::settings::MAX_EXTENT`]
    SizeTooLarge { width: u32, height: u32 },
    /// Play speed is not a positive, finite number
    InvalidFps(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySize { width, height } => {
                write!(f, "grid size {width}x{height} must be at least 1x1")
            }
            Self::SizeTooLarge { width, height } => write!(
                f,
                "grid size {width}x{height} exceeds the maximum of {0}x{0}",
                crate::settings::MAX_EXTENT
            ),
            Self::InvalidFps(fps) => write!(f, "play speed {fps} must be a positive number"),
        }
    }
}

impl std::error::Error for ConfigError {}
