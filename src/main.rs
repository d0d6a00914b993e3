use std::{thread, time::Instant};

use anyhow::{Context, Result};
use lifepaint::SimulationController;
use log::{info, warn};

mod console;
mod options;

use console::{ConsoleCommand, ConsoleRender};

fn main() -> Result<()> {
    env_logger::init();

    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };
    let settings = args.settings()?;
    let refresh = args.refresh()?;
    info!(
        "starting with a {} grid at {} fps on {} thread(s)",
        settings.size(),
        settings.fps(),
        settings.threads()
    );

    let mut game = SimulationController::new(settings);
    let mut console = ConsoleRender::new().context("failed to set up the terminal")?;
    let start = Instant::now();

    'ticks: loop {
        let mut commands = Vec::new();
        while let Some(cmd) = console.poll_events()? {
            match cmd {
                ConsoleCommand::Exit => break 'ticks,
                ConsoleCommand::Simulate(command) => commands.push(command),
                ConsoleCommand::Speed(delta) => {
                    let fps = (game.settings().fps() + delta).max(1.0);
                    if let Err(err) = game.set_fps(fps) {
                        warn!("{err}");
                    }
                }
                ConsoleCommand::Grow(delta) => {
                    let size = game.settings().size().grow(delta);
                    if let Err(err) = game.set_size(size) {
                        warn!("{err}");
                    }
                }
                ConsoleCommand::Handled => {}
            }
        }

        let report = game.tick(start.elapsed(), commands);
        console.render(&game, &report)?;
        thread::sleep(refresh);
    }
    std::mem::drop(console);

    info!(
        "stopped at frame {} with {} alive cells",
        game.frame(),
        game.grid().alive_count()
    );
    Ok(())
}
