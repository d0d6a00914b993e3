use std::time::Duration;

use anyhow::{Context, Result};
use lifepaint::{
    Settings, Size,
    settings::{DEFAULT_FPS, DEFAULT_SIZE},
};

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    /// Parses command line arguments, returning `None` if help was requested
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optopt("w", "width", "set grid width (default 25)", "WIDTH");
        opts.optopt("h", "height", "set grid height (default 25)", "HEIGHT");
        opts.optopt("f", "fps", "generations per second in play mode (default 10)", "FPS");
        opts.optopt("t", "threads", "evaluate generations on N threads", "N");
        opts.optopt("r", "refresh", "milliseconds between screen refreshes", "MILLIS");

        let matches = opts
            .parse(args.iter().map(T::as_ref))
            .context("invalid arguments")?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifepaint [options]"));
            println!("keys: F1 edit, F2 play, F3 step, F5 reset, +/- speed, [/] size, q quit");
            println!("mouse: left button paints, right button erases");
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> Result<Option<Self>> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn width(&self) -> Result<Option<u32>> {
        self.matches.opt_get("width").context("invalid --width")
    }
    fn height(&self) -> Result<Option<u32>> {
        self.matches.opt_get("height").context("invalid --height")
    }
    fn fps(&self) -> Result<Option<f64>> {
        self.matches.opt_get("fps").context("invalid --fps")
    }
    fn threads(&self) -> Result<Option<usize>> {
        self.matches.opt_get("threads").context("invalid --threads")
    }

    pub fn grid_size(&self) -> Result<Size> {
        Ok(Size::new(
            self.width()?.unwrap_or(DEFAULT_SIZE.width),
            self.height()?.unwrap_or(DEFAULT_SIZE.height),
        ))
    }

    pub fn settings(&self) -> Result<Settings> {
        let settings = Settings::new(self.grid_size()?, self.fps()?.unwrap_or(DEFAULT_FPS))?;
        Ok(settings.with_threads(self.threads()?.unwrap_or(1)))
    }

    pub fn refresh(&self) -> Result<Duration> {
        let millis = self
            .matches
            .opt_get_default::<u64>("refresh", 16)
            .context("invalid --refresh")?;
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        Args::new(list).expect("valid args").expect("not help")
    }

    #[test]
    fn defaults() {
        let args = args(&[]);
        let settings = args.settings().expect("default settings");

        assert_eq!(settings, Settings::default());
        assert_eq!(args.refresh().unwrap(), Duration::from_millis(16));
    }

    #[test]
    fn size_and_speed_parse() {
        let settings = args(&["-w", "40", "--height", "30", "--fps", "2.5", "-t", "4"])
            .settings()
            .expect("settings");

        assert_eq!(settings.size(), Size::new(40, 30));
        assert_eq!(settings.fps(), 2.5);
        assert_eq!(settings.threads(), 4);
    }

    #[test]
    fn help_returns_none() {
        assert!(Args::new(&["--help"]).unwrap().is_none());
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(args(&["--width", "0"]).settings().is_err());
    }

    #[test]
    fn garbage_values_are_rejected() {
        assert!(args(&["--height", "tall"]).settings().is_err());
        assert!(args(&["--fps", "fast"]).settings().is_err());
        assert!(args(&["--fps", "0"]).settings().is_err());
        assert!(args(&["--refresh", "soon"]).refresh().is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(Args::new(&["--bogus"]).is_err());
    }
}
