//! The Edit/Play session driving a [`GridState`].

use crate::{
    Bounds, ConfigError, GridState, Pos2, Settings, Size,
    engine::{self, Change},
};
use log::{debug, info, trace, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Only held before a controller finishes construction
    #[default]
    None,
    /// Painting is accepted; generations only advance on [`Command::StepOnce`]
    Edit,
    /// Generations advance automatically at the configured speed
    Play,
}
impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "MODE: None",
            Self::Edit => "MODE: Edit",
            Self::Play => "MODE: Play",
        }
    }
}
impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Input for the controller, already translated from raw input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    EnterEdit,
    /// Switches to Play and restarts the frame counter
    EnterPlay,
    /// Advances exactly one generation, in any mode
    StepOnce,
    /// Kills every cell and returns to Edit
    Reset,
    /// Paints a grid cell alive or dead; only honored in Edit mode and inside the bounds
    PaintAt { pos: Pos2, alive: bool },
}

/// What happened during a single [`SimulationController::tick`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickReport {
    /// Cell changes in the order they happened
    pub changes: Vec<Change>,
    pub mode: Mode,
    pub frame: u64,
    /// Number of generations advanced during the tick
    pub advanced: usize,
}

#[derive(Debug)]
pub struct SimulationController {
    settings: Settings,
    /// The size used on the previous tick, zero before the first one
    size_was: Size,
    bounds: Bounds,
    grid: GridState,
    mode: Mode,
    frame: u64,
    /// Earliest time the next Play-mode generation may run
    next_frame: Duration,
    /// Pool for row-parallel generations, present when more than one thread is configured
    pool: Option<ThreadPool>,
}

impl SimulationController {
    pub fn new(settings: Settings) -> Self {
        let mut controller = Self {
            settings,
            size_was: Size::default(),
            bounds: Bounds::from_size(settings.size()),
            grid: GridState::new(),
            mode: Mode::default(),
            frame: 0,
            next_frame: Duration::ZERO,
            pool: build_pool(settings.threads()),
        };
        controller.set_mode(Mode::Edit);
        controller
    }

    /// Runs one update cycle
    ///
    /// `now` is the time elapsed since some fixed start; it only has to be
    /// monotonic. Commands are applied in order before Play-mode advancing,
    /// and a changed size wipes the grid at the end of the tick.
    pub fn tick<I>(&mut self, now: Duration, commands: I) -> TickReport
    where
        I: IntoIterator<Item = Command>,
    {
        let mut report = TickReport::default();
        self.bounds = Bounds::from_size(self.settings.size());

        for command in commands {
            self.apply(command, &mut report);
        }

        if self.mode == Mode::Play && now >= self.next_frame {
            self.next_frame = now.saturating_add(self.settings.frame_interval());
            self.advance(&mut report);
        }

        let size = self.settings.size();
        if size != self.size_was {
            debug!("grid size changed from {} to {}", self.size_was, size);
            self.clear(&mut report);
        }
        self.size_was = size;

        report.mode = self.mode;
        report.frame = self.frame;
        report
    }

    fn apply(&mut self, command: Command, report: &mut TickReport) {
        match command {
            Command::EnterEdit => self.set_mode(Mode::Edit),
            Command::EnterPlay => {
                self.frame = 0;
                self.set_mode(Mode::Play);
            }
            Command::StepOnce => self.advance(report),
            Command::Reset => {
                self.clear(report);
                self.set_mode(Mode::Edit);
            }
            Command::PaintAt { pos, alive } => self.paint(pos, alive, report),
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            info!("{}", mode.label());
        }
        self.mode = mode;
    }

    fn paint(&mut self, pos: Pos2, alive: bool, report: &mut TickReport) {
        if self.mode != Mode::Edit {
            return;
        }
        if !self.bounds.contains(pos) {
            trace!("ignoring paint at {pos}, outside of {:?}", self.bounds);
            return;
        }
        if self.grid.set(pos, alive) {
            report.changes.push(if alive {
                Change::Paint(pos)
            } else {
                Change::Clear(pos)
            });
        }
    }

    fn advance(&mut self, report: &mut TickReport) {
        let (grid, bounds) = (&self.grid, self.bounds);
        let changes = match &self.pool {
            Some(pool) => pool.install(|| engine::next_generation_parallel(grid, bounds)),
            None => engine::next_generation(grid, bounds),
        };
        engine::apply(&mut self.grid, &changes);

        self.frame += 1;
        report.advanced += 1;
        trace!(
            "frame {}: {} changed, {} alive",
            self.frame,
            changes.len(),
            self.grid.alive_count()
        );
        report.changes.extend(changes);
    }

    fn clear(&mut self, report: &mut TickReport) {
        debug!("clear map");
        self.grid.clear();
        debug!("clear background over {}", self.bounds.size());
        report.changes.push(Change::Background(self.bounds));
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    /// Replaces all settings; a new size takes effect on the next tick
    pub fn set_settings(&mut self, settings: Settings) {
        if settings.threads() != self.settings.threads() {
            self.pool = build_pool(settings.threads());
        }
        self.settings = settings;
    }
    pub fn set_size(&mut self, size: Size) -> Result<(), ConfigError> {
        self.settings.set_size(size)
    }
    pub fn set_fps(&mut self, fps: f64) -> Result<(), ConfigError> {
        self.settings.set_fps(fps)
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }
    /// Bounds computed on the most recent tick
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
    #[inline]
    pub fn grid(&self) -> &GridState {
        &self.grid
    }
    #[inline]
    pub fn is_alive(&self, pos: Pos2) -> bool {
        self.grid.get(pos)
    }
    #[inline]
    pub fn alive(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.grid.alive()
    }
}

/// Builds a dedicated pool of `threads` workers, or `None` for serial stepping
///
/// A pool that fails to start is logged and stepping falls back to serial.
fn build_pool(threads: usize) -> Option<ThreadPool> {
    if threads <= 1 {
        return None;
    }
    ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("lifepaint-step-{i}"))
        .build()
        .inspect_err(|err| warn!("stepping serially, no pool of {threads} threads: {err}"))
        .ok()
}

impl Default for SimulationController {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
