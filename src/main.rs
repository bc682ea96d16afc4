use std::{io, thread, time::Duration};

mod console;
mod options;

use console::ConsoleCommand;
use options::FillMode;
use rand::Rng;
use rulegrid::Simulation;

/// How much one `+`/`-` key press moves the tick period.
const PERIOD_STEP: Duration = Duration::from_millis(25);

fn apply_fill(sim: &mut Simulation, mode: FillMode) {
    match mode {
        FillMode::Glider => {}
        FillMode::Empty => clear_board(sim),
        FillMode::Random => {
            clear_board(sim);
            let mut rng = rand::rng();
            let size = sim.size();
            for x in 0..size {
                for y in 0..size {
                    if rng.random_bool(0.5) {
                        sim.toggle_cell(x, y).expect("toggle in-bounds cell");
                    }
                }
            }
        }
    }
}

fn clear_board(sim: &mut Simulation) {
    let alive: Vec<_> = sim
        .grid()
        .iter()
        .filter(|&(_, _, cell)| cell.alive)
        .map(|(x, y, _)| (x, y))
        .collect();
    for (x, y) in alive {
        sim.toggle_cell(x, y).expect("toggle in-bounds cell");
    }
}

fn apply_command(sim: &mut Simulation, cmd: ConsoleCommand) {
    let outcome = match cmd {
        ConsoleCommand::TogglePause => {
            if sim.is_paused() {
                sim.resume();
            } else {
                sim.pause();
            }
            Ok(())
        }
        ConsoleCommand::SlowerPeriod => sim.set_period(sim.period() + PERIOD_STEP),
        ConsoleCommand::FasterPeriod => {
            let shorter = sim.period().saturating_sub(PERIOD_STEP);
            if shorter.is_zero() {
                Ok(()) // already at the floor
            } else {
                sim.set_period(shorter)
            }
        }
        ConsoleCommand::Grow => sim.resize(sim.size() as i32 + 1),
        ConsoleCommand::Shrink => sim.resize(sim.size() as i32 - 1),
        ConsoleCommand::Reseed => {
            sim.reseed();
            Ok(())
        }
        ConsoleCommand::ToggleCell(x, y) => sim.toggle_cell(x, y),
        ConsoleCommand::ToggleBirth(n) => match sim.rules().birth_at(n) {
            Ok(v) => sim.set_birth_rule(n, !v),
            Err(err) => Err(err),
        },
        ConsoleCommand::ToggleDeath(n) => match sim.rules().death_at(n) {
            Ok(v) => sim.set_death_rule(n, !v),
            Err(err) => Err(err),
        },
        ConsoleCommand::Exit | ConsoleCommand::Handled => Ok(()),
    };
    if let Err(err) = outcome {
        // recoverable by design; the state is untouched
        log::warn!("rejected command: {err}");
    }
}

fn main() -> io::Result<()> {
    env_logger::init();
    let Some(args) = options::Args::from_env() else {
        return Ok(()); // --help was printed
    };

    let mut sim = Simulation::new(args.size(), args.period()).expect("valid size and period");
    apply_fill(&mut sim, args.fill_mode());
    if args.paused() {
        sim.pause();
    }
    let max_generations = args.generations();

    let mut console = console::ConsoleRender::new()?;
    let mut rendered_revision = None;
    'main: loop {
        while let Some(cmd) = console.poll_events()? {
            if matches!(cmd, ConsoleCommand::Exit) {
                break 'main;
            }
            apply_command(&mut sim, cmd);
            // any key may have moved the cursor or changed the footer
            rendered_revision = None;
        }

        sim.poll();
        if sim.generation() >= max_generations {
            break;
        }

        if rendered_revision != Some(sim.revision()) {
            console.render(&sim)?;
            rendered_revision = Some(sim.revision());
        }

        thread::sleep(Duration::from_millis(1));
    }
    std::mem::drop(console);

    Ok(())
}
