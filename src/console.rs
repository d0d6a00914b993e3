use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::Print,
    terminal,
};
use lifepaint::{
    Change, Command, GridView, Pos2, SimulationController, TickReport,
    view::{ALIVE_GLYPH, DEAD_GLYPH},
};
use std::io::{self, Write};

/// Input that the main loop has to act on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsoleCommand {
    Exit,
    Handled,
    Simulate(Command),
    /// Change the play speed by this many generations per second
    Speed(f64),
    /// Grow (or shrink) the grid by this many cells on each axis
    Grow(i32),
}

/// Maps between terminal cells and grid coordinates
///
/// The grid origin sits in the middle of the terminal, with grid y growing
/// upward. The last terminal row is reserved for the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    cols: u16,
    rows: u16,
}
impl Screen {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    fn grid_rows(&self) -> u16 {
        self.rows.saturating_sub(1)
    }
    fn center(&self) -> Pos2 {
        Pos2::new(i32::from(self.cols / 2), i32::from(self.grid_rows() / 2))
    }

    pub fn to_grid(&self, col: u16, row: u16) -> Pos2 {
        let center = self.center();
        Pos2::new(i32::from(col) - center.x, center.y - i32::from(row))
    }

    /// Terminal cell for a grid coordinate, if it is visible
    pub fn to_screen(&self, pos: Pos2) -> Option<(u16, u16)> {
        let center = self.center();
        let col = u16::try_from(center.x + pos.x).ok()?;
        let row = u16::try_from(center.y - pos.y).ok()?;
        (col < self.cols && row < self.grid_rows()).then_some((col, row))
    }

    /// Terminal cells of the alive cells in `view` that are on screen
    pub fn visible_cells(&self, view: &GridView<'_>) -> Vec<(u16, u16)> {
        view.iter().filter_map(|pos| self.to_screen(pos)).collect()
    }
}

pub struct ConsoleRender {
    screen: Screen,
    redraw: bool,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(Self {
            screen: Screen::new(cols, rows),
            redraw: true,
        })
    }

    pub fn render(&mut self, game: &SimulationController, report: &TickReport) -> io::Result<()> {
        let mut stdout = io::stdout();
        let background = report
            .changes
            .iter()
            .any(|change| matches!(change, Change::Background(_)));

        if self.redraw || background {
            // a full redraw already reflects every change in the report
            self.draw_all(&mut stdout, game)?;
            self.redraw = false;
        } else {
            for change in &report.changes {
                match *change {
                    Change::Paint(pos) => self.draw_cell(&mut stdout, pos, ALIVE_GLYPH)?,
                    Change::Clear(pos) => self.draw_cell(&mut stdout, pos, DEAD_GLYPH)?,
                    Change::Background(_) => {}
                }
            }
        }

        // write footer
        let settings = game.settings();
        let footer = format!(
            "{}  FRAME: {}  SIZE: {}  FPS: {}",
            report.mode,
            report.frame,
            settings.size(),
            settings.fps()
        );
        queue!(
            stdout,
            cursor::MoveTo(0, self.screen.grid_rows()),
            terminal::Clear(terminal::ClearType::CurrentLine),
            Print(footer)
        )?;

        stdout.flush()
    }

    fn draw_all(&self, stdout: &mut io::Stdout, game: &SimulationController) -> io::Result<()> {
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

        // only visit the visible part of the bounds
        let bounds = game.bounds();
        for row in 0..self.screen.grid_rows() {
            for col in 0..self.screen.cols {
                if bounds.contains(self.screen.to_grid(col, row)) {
                    queue!(stdout, cursor::MoveTo(col, row), Print(DEAD_GLYPH))?;
                }
            }
        }
        let view = GridView::new(game.grid(), bounds);
        for (col, row) in self.screen.visible_cells(&view) {
            queue!(stdout, cursor::MoveTo(col, row), Print(ALIVE_GLYPH))?;
        }
        Ok(())
    }

    fn draw_cell(&self, stdout: &mut io::Stdout, pos: Pos2, glyph: char) -> io::Result<()> {
        if let Some((col, row)) = self.screen.to_screen(pos) {
            queue!(stdout, cursor::MoveTo(col, row), Print(glyph))?;
        }
        Ok(())
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let cmd = match event::read()? {
            event::Event::Resize(cols, rows) => {
                self.screen = Screen::new(cols, rows);
                self.redraw = true;
                ConsoleCommand::Handled
            }
            event::Event::Key(key) => map_key(key),
            event::Event::Mouse(mouse) => self.map_mouse(mouse),
            _ => ConsoleCommand::Handled,
        };
        Ok(Some(cmd))
    }

    fn map_mouse(&self, mouse: MouseEvent) -> ConsoleCommand {
        let alive = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                true
            }
            MouseEventKind::Down(MouseButton::Right)
            | MouseEventKind::Drag(MouseButton::Right) => false,
            _ => return ConsoleCommand::Handled,
        };
        let pos = self.screen.to_grid(mouse.column, mouse.row);
        ConsoleCommand::Simulate(Command::PaintAt { pos, alive })
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        let restored = execute!(
            io::stdout(),
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        )
        .and_then(|()| terminal::disable_raw_mode());
        if let Err(err) = restored {
            log::warn!("failed to restore terminal: {err}");
        }
    }
}

fn map_key(key: KeyEvent) -> ConsoleCommand {
    if key.kind != KeyEventKind::Press {
        return ConsoleCommand::Handled;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            ConsoleCommand::Exit
        }
        KeyCode::Char('q') | KeyCode::Esc => ConsoleCommand::Exit,
        KeyCode::F(1) => ConsoleCommand::Simulate(Command::EnterEdit),
        KeyCode::F(2) => ConsoleCommand::Simulate(Command::EnterPlay),
        KeyCode::F(3) => ConsoleCommand::Simulate(Command::StepOnce),
        KeyCode::F(5) => ConsoleCommand::Simulate(Command::Reset),
        KeyCode::Char('+' | '=') => ConsoleCommand::Speed(1.0),
        KeyCode::Char('-') => ConsoleCommand::Speed(-1.0),
        KeyCode::Char(']') => ConsoleCommand::Grow(2),
        KeyCode::Char('[') => ConsoleCommand::Grow(-2),
        _ => ConsoleCommand::Handled,
    }
}
