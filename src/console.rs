use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use rulegrid::Simulation;
use std::io;

pub enum ConsoleCommand {
    Exit,
    TogglePause,
    SlowerPeriod,
    FasterPeriod,
    Grow,
    Shrink,
    Reseed,
    ToggleCell(usize, usize),
    ToggleBirth(usize),
    ToggleDeath(usize),
    Handled,
}

#[derive(Clone, Copy)]
enum RuleKind {
    Birth,
    Death,
}

/// Raw-mode terminal front-end: renders the grid and a status footer,
/// and turns key presses into [`ConsoleCommand`]s for the main loop.
pub struct ConsoleRender {
    cursor: (usize, usize),
    pending_rule: Option<RuleKind>,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self {
            cursor: (0, 0),
            pending_rule: None,
        })
    }

    fn rules_line(sim: &Simulation) -> String {
        let digits = |lookup: &dyn Fn(usize) -> bool| {
            (0..=8)
                .filter(|&n| lookup(n))
                .map(|n| char::from_digit(n as u32, 10).unwrap_or('?'))
                .collect::<String>()
        };
        let rules = sim.rules();
        format!(
            "B{}/D{}",
            digits(&|n| rules.birth_at(n).unwrap_or(false)),
            digits(&|n| rules.death_at(n).unwrap_or(false)),
        )
    }

    pub fn render(&mut self, sim: &Simulation) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;

        // keep the cursor on the board after a resize
        let max = sim.size().saturating_sub(1);
        self.cursor = (self.cursor.0.min(max), self.cursor.1.min(max));

        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        // x indexes rows, y indexes columns
        for (x, y, cell) in sim.grid().iter() {
            if !cell.alive || y >= cols as usize || x >= rows as usize {
                continue;
            }
            queue!(stdout, cursor::MoveTo(y as u16, x as u16))?;
            io::Write::write_all(&mut stdout, "█".as_bytes())?;
        }

        let (cx, cy) = self.cursor;
        if cy < cols as usize && cx < rows as usize {
            queue!(stdout, cursor::MoveTo(cy as u16, cx as u16))?;
            io::Write::write_all(&mut stdout, "+".as_bytes())?;
        }

        // write footer
        let footer = format!(
            "gen:{} size:{} period:{}ms alive:{} {} {}",
            sim.generation(),
            sim.size(),
            sim.period().as_millis(),
            sim.grid().alive_count(),
            Self::rules_line(sim),
            if sim.is_paused() { "[paused]" } else { "" },
        );
        queue!(stdout, cursor::MoveTo(0, rows.saturating_sub(1)))?;
        io::Write::write_all(&mut stdout, footer.as_bytes())?;

        io::Write::flush(&mut stdout)
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is present for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let key = match event::read()? {
            event::Event::Key(key) => key,
            _ => return Ok(Some(ConsoleCommand::Handled)),
        };

        // CTRL+C
        if let KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } = key
        {
            return Ok(Some(ConsoleCommand::Exit));
        }

        // a pending 'b' or 'd' consumes the next digit as a rule index
        if let Some(kind) = self.pending_rule.take()
            && let KeyCode::Char(c) = key.code
            && let Some(n) = c.to_digit(10)
        {
            let n = n as usize;
            return Ok(Some(match kind {
                RuleKind::Birth => ConsoleCommand::ToggleBirth(n),
                RuleKind::Death => ConsoleCommand::ToggleDeath(n),
            }));
        }

        let cmd = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => ConsoleCommand::Exit,
            KeyCode::Char(' ') => ConsoleCommand::TogglePause,
            KeyCode::Char('+') | KeyCode::Char('=') => ConsoleCommand::SlowerPeriod,
            KeyCode::Char('-') => ConsoleCommand::FasterPeriod,
            KeyCode::Char(']') => ConsoleCommand::Grow,
            KeyCode::Char('[') => ConsoleCommand::Shrink,
            KeyCode::Char('r') => ConsoleCommand::Reseed,
            KeyCode::Char('t') | KeyCode::Enter => {
                ConsoleCommand::ToggleCell(self.cursor.0, self.cursor.1)
            }
            KeyCode::Char('b') => {
                self.pending_rule = Some(RuleKind::Birth);
                ConsoleCommand::Handled
            }
            KeyCode::Char('d') => {
                self.pending_rule = Some(RuleKind::Death);
                ConsoleCommand::Handled
            }
            // arrows move the cell cursor
            KeyCode::Up => {
                self.cursor.0 = self.cursor.0.saturating_sub(1);
                ConsoleCommand::Handled
            }
            KeyCode::Down => {
                self.cursor.0 += 1;
                ConsoleCommand::Handled
            }
            KeyCode::Left => {
                self.cursor.1 = self.cursor.1.saturating_sub(1);
                ConsoleCommand::Handled
            }
            KeyCode::Right => {
                self.cursor.1 += 1;
                ConsoleCommand::Handled
            }
            _ => ConsoleCommand::Handled,
        };
        Ok(Some(cmd))
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show).expect("enable cursor");
    }
}
