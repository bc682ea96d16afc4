use super::scheduler::{Clock, Scheduler, SystemClock, Tick};
use super::step;
use crate::error::EngineError;
use crate::grid::Grid;
use crate::rules::RuleTable;
use std::time::Duration;

/// The canonical seed pattern, a glider near the origin. Cells that
/// fall outside a small grid are clipped.
const SEED: [(usize, usize); 5] = [(0, 2), (1, 3), (2, 1), (2, 2), (2, 3)];

fn seed(grid: &mut Grid) {
    let size = grid.size();
    for &(x, y) in &SEED {
        if x < size && y < size {
            grid.at_mut(x, y).alive = true;
        }
    }
}

/// One self-contained simulation: grid, rule tables, generation
/// counter and tick scheduler bundled behind a single owner.
///
/// Mutators either succeed or leave the whole bundle untouched. The
/// struct is `Send`; callers that drive it from more than one thread
/// put it behind one mutex, which serializes every mutation against
/// any in-flight step.
#[derive(Debug)]
pub struct Simulation<C: Clock = SystemClock> {
    grid: Grid,
    rules: RuleTable,
    generation: u64,
    revision: u64,
    scheduler: Scheduler<C>,
}

impl Simulation<SystemClock> {
    /// Creates a seeded simulation and starts its scheduler.
    pub fn new(size: i32, period: Duration) -> Result<Self, EngineError> {
        Self::with_clock(size, period, SystemClock)
    }
}

impl<C: Clock> Simulation<C> {
    pub fn with_clock(size: i32, period: Duration, clock: C) -> Result<Self, EngineError> {
        let mut grid = Grid::new(size)?;
        seed(&mut grid);
        let mut scheduler = Scheduler::with_clock(clock);
        scheduler.start(period)?;
        log::info!("simulation started: size={size}, period={period:?}");
        Ok(Self {
            grid,
            rules: RuleTable::default(),
            generation: 0,
            revision: 0,
            scheduler,
        })
    }

    /// Polls the scheduler and, if an unpaused tick fired, advances the
    /// grid by one generation. Returns whether a step happened.
    pub fn poll(&mut self) -> bool {
        match self.scheduler.poll() {
            Tick::Fired => {
                self.generation += 1;
                self.grid = step(&self.grid, &self.rules);
                self.revision += 1;
                true
            }
            Tick::Suppressed | Tick::None => false,
        }
    }

    /// Rebuilds the grid at `new_size`, reseeds it, resets the
    /// generation counter and restarts the schedule with the period
    /// and pause state carried over.
    pub fn resize(&mut self, new_size: i32) -> Result<(), EngineError> {
        let mut grid = Grid::new(new_size)?;
        seed(&mut grid);

        let period = self.scheduler.period();
        let paused = self.scheduler.is_paused();
        self.scheduler.stop();
        self.scheduler.start(period)?;
        if paused {
            self.scheduler.pause();
        }

        self.grid = grid;
        self.generation = 0;
        self.revision += 1;
        log::debug!("resized to {new_size}");
        Ok(())
    }

    /// Kills every cell, re-applies the canonical seed and resets the
    /// generation counter. The scheduler is untouched.
    pub fn reseed(&mut self) {
        self.grid.clear();
        seed(&mut self.grid);
        self.generation = 0;
        self.revision += 1;
        log::debug!("reseeded");
    }

    /// Flips one cell in place. Generation and schedule are unaffected.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<(), EngineError> {
        let cell = self.grid.get(x, y)?;
        self.grid.set(x, y, !cell.alive)?;
        self.revision += 1;
        Ok(())
    }

    pub fn set_birth_rule(&mut self, n: usize, value: bool) -> Result<(), EngineError> {
        self.rules.set_birth(n, value)
    }

    pub fn set_death_rule(&mut self, n: usize, value: bool) -> Result<(), EngineError> {
        self.rules.set_death(n, value)
    }

    pub fn set_period(&mut self, period: Duration) -> Result<(), EngineError> {
        self.scheduler.set_period(period)
    }

    pub fn pause(&mut self) {
        self.scheduler.pause();
    }

    pub fn resume(&mut self) {
        self.scheduler.resume();
    }

    // read-only snapshot surface for the rendering collaborator

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Bumped on every externally visible grid change; the renderer
    /// polls it to learn when to redraw.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.scheduler.period()
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.scheduler.is_paused()
    }
}
