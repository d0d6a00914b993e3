//! Core library for an interactive, bounded Conway's Game of Life.
//!
//! Cells are painted in Edit mode and evolved in Play mode (or one step at a
//! time) by a [`SimulationController`]. Rendering and input live outside the
//! library and talk to the controller through [`Command`]s and [`Change`]s.

pub mod bounds;
pub mod controller;
pub mod engine;
pub mod error;
pub mod grid;
pub mod pos;
pub mod settings;
pub mod view;

pub use bounds::{Bounds, Size};
pub use controller::{Command, Mode, SimulationController, TickReport};
pub use engine::Change;
pub use error::ConfigError;
pub use grid::GridState;
pub use pos::Pos2;
pub use settings::Settings;
pub use view::GridView;
