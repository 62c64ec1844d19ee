use crate::error::SimulationError;
use crate::generation::Generation;
use crate::patterns::{self, PatternId};
use crate::settings::SimulationSettings;
use crate::ticker::Ticker;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Requests a UI can send to the simulation, carrying only plain values
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Tick,
    ToggleCell { row: usize, col: usize },
    ResetToPattern,
    ResetToEmpty,
    SetGridSize(usize),
    SelectPattern(PatternId),
    LoadPattern(PatternId),
    StartTicking,
    StopTicking,
    SetTickSpeed(u32),
    ResetTickInterval,
    SetRandomLife(bool),
    Randomize,
    SetCurrentGeneration(Generation),
}

/// Read-only counters for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationStats {
    pub generation_count: u64,
    pub live_cell_count: usize,
    pub grid_size: usize,
    pub auto_ticking: bool,
    pub tick_interval_ms: u64,
    pub random_life_active: bool,
    pub selected_pattern: PatternId,
}

/// Game of Life state: the board, its counters and the auto-tick timer
pub struct Simulation {
    pub settings: SimulationSettings,
    current: Generation,
    grid_size: usize,
    selected_pattern: PatternId,
    generation_count: u64,
    live_cell_count: usize,
    tick_interval_ms: u64,
    random_life_active: bool,
    ticker: Ticker,
    rng: StdRng,
}

impl Simulation {
    pub fn new(settings: SimulationSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Deterministic random life, for replays and tests
    pub fn with_seed(settings: SimulationSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: SimulationSettings, rng: StdRng) -> Self {
        let settings = settings.sanitized();
        let grid_size = settings.initial_grid_size;
        Self {
            current: Generation::empty(grid_size),
            grid_size,
            selected_pattern: PatternId::Empty,
            generation_count: 0,
            live_cell_count: 0,
            tick_interval_ms: settings.default_tick_interval_ms,
            random_life_active: false,
            ticker: Ticker::new(),
            rng,
            settings,
        }
    }

    // === Accessors ===

    pub fn current_generation(&self) -> &Generation {
        &self.current
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn min_grid_size(&self) -> usize {
        self.settings.min_grid_size
    }

    pub fn max_grid_size(&self) -> usize {
        self.settings.max_grid_size
    }

    pub fn selected_pattern(&self) -> PatternId {
        self.selected_pattern
    }

    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    pub fn live_cell_count(&self) -> usize {
        self.live_cell_count
    }

    /// True exactly while a ticker handle is held
    pub fn auto_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn max_tick_interval_ms(&self) -> u64 {
        self.settings.max_tick_interval_ms
    }

    /// Current interval expressed on the 1-100 speed scale
    pub fn tick_speed(&self) -> u32 {
        self.settings.speed_for_interval(self.tick_interval_ms)
    }

    pub fn random_life_active(&self) -> bool {
        self.random_life_active
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            generation_count: self.generation_count,
            live_cell_count: self.live_cell_count,
            grid_size: self.grid_size,
            auto_ticking: self.auto_ticking(),
            tick_interval_ms: self.tick_interval_ms,
            random_life_active: self.random_life_active,
            selected_pattern: self.selected_pattern,
        }
    }

    fn recount(&mut self) {
        self.live_cell_count = self.current.count_live_cells();
    }

    // === Transitions ===

    /// Advance one generation, then add a random live cell if enabled
    pub fn tick(&mut self) {
        self.current = self.current.advance();
        if self.random_life_active {
            match self.current.inject_random_life(&mut self.rng) {
                Some((row, col)) => log::trace!("random life at ({}, {})", row, col),
                None => log::warn!("board saturated, skipping random life"),
            }
        }
        self.generation_count += 1;
        self.recount();
        log::trace!(
            "generation {} has {} live cells",
            self.generation_count,
            self.live_cell_count
        );
    }

    /// Flip one cell. Counts as a generation step.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), SimulationError> {
        self.current = self.current.toggle_cell(row, col)?;
        self.generation_count += 1;
        self.recount();
        Ok(())
    }

    /// Reload the selected pattern at the current size
    pub fn reset(&mut self) {
        self.reset_to_pattern();
    }

    pub fn reset_to_pattern(&mut self) {
        self.current = patterns::generate(self.selected_pattern, self.grid_size);
        self.generation_count = 0;
        self.recount();
        log::debug!(
            "reset to {} at {}x{}",
            self.selected_pattern.name(),
            self.grid_size,
            self.grid_size
        );
    }

    /// Clear the board, keeping grid size and tick interval
    pub fn reset_to_empty(&mut self) {
        self.current = Generation::empty(self.grid_size);
        self.generation_count = 0;
        self.recount();
        log::debug!("reset to empty board");
    }

    /// Crop or pad the board to `size`; out-of-range sizes leave state untouched
    pub fn set_grid_size(&mut self, size: usize) -> Result<(), SimulationError> {
        if !self.settings.contains_grid_size(size) {
            log::warn!(
                "rejected grid size {} (allowed {}..={})",
                size,
                self.settings.min_grid_size,
                self.settings.max_grid_size
            );
            return Err(SimulationError::InvalidGridSize {
                requested: size,
                min: self.settings.min_grid_size,
                max: self.settings.max_grid_size,
            });
        }
        self.current = self.current.resize(size);
        self.grid_size = size;
        self.recount();
        log::debug!("grid resized to {}x{}", size, size);
        Ok(())
    }

    /// Remember a pattern for the next reset. The board is not touched.
    pub fn select_pattern(&mut self, pattern: PatternId) {
        self.selected_pattern = pattern;
        log::debug!("selected pattern {}", pattern.name());
    }

    /// Select by name; unknown names select the empty pattern
    pub fn select_pattern_by_name(&mut self, name: &str) {
        self.select_pattern(PatternId::from_name(name));
    }

    /// Select a pattern and put it on the board
    pub fn load_pattern(&mut self, pattern: PatternId) {
        self.select_pattern(pattern);
        self.reset_to_pattern();
    }

    /// Start auto-ticking, restarting the timer if it is already running
    pub fn start_ticking(&mut self, now: Instant) {
        let interval = Duration::from_millis(self.tick_interval_ms);
        let id = self.ticker.start(interval, now).id();
        log::info!("auto-tick #{} started every {} ms", id, self.tick_interval_ms);
    }

    pub fn stop_ticking(&mut self) {
        if let Some(handle) = self.ticker.stop() {
            log::info!("auto-tick #{} stopped", handle.id());
        }
    }

    /// Set speed on the 1-100 scale; a running timer picks up the new interval
    pub fn set_tick_speed(&mut self, speed: u32, now: Instant) {
        self.apply_tick_interval(self.settings.interval_for_speed(speed), now);
    }

    pub fn reset_tick_interval(&mut self, now: Instant) {
        self.apply_tick_interval(self.settings.default_tick_interval_ms, now);
    }

    fn apply_tick_interval(&mut self, interval_ms: u64, now: Instant) {
        self.tick_interval_ms = interval_ms;
        if self.ticker.reschedule(Duration::from_millis(interval_ms), now) {
            log::debug!("auto-tick rescheduled to {} ms", interval_ms);
        }
    }

    pub fn set_random_life(&mut self, active: bool) {
        self.random_life_active = active;
        log::debug!("random life {}", if active { "on" } else { "off" });
    }

    pub fn toggle_random_life(&mut self) {
        self.set_random_life(!self.random_life_active);
    }

    /// Replace the board wholesale; it must match the current grid size
    pub fn set_current_generation(&mut self, generation: Generation) -> Result<(), SimulationError> {
        if generation.size() != self.grid_size {
            return Err(SimulationError::GenerationSizeMismatch {
                expected: self.grid_size,
                actual: generation.size(),
            });
        }
        self.current = generation;
        self.generation_count = 0;
        self.recount();
        Ok(())
    }

    /// Fill the board with random cells at the configured density
    pub fn randomize(&mut self) {
        let board = Generation::randomize(self.grid_size, self.settings.random_density, &mut self.rng);
        self.current = board;
        self.generation_count = 0;
        self.recount();
        log::debug!("randomized board, {} live cells", self.live_cell_count);
    }

    /// Run the auto-tick policy at time `now`.
    ///
    /// Returns true if a generation was advanced. The timer stops itself once
    /// the board has no live cells.
    pub fn poll_auto_tick(&mut self, now: Instant) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }
        if self.live_cell_count == 0 {
            log::info!("board is empty, stopping auto-tick");
            self.stop_ticking();
            return false;
        }
        self.tick();
        if self.live_cell_count == 0 {
            log::info!("board died out at generation {}", self.generation_count);
            self.stop_ticking();
        }
        true
    }

    /// Dispatch an intent to its transition
    pub fn apply(&mut self, intent: Intent, now: Instant) -> Result<(), SimulationError> {
        match intent {
            Intent::Tick => self.tick(),
            Intent::ToggleCell { row, col } => self.toggle_cell(row, col)?,
            Intent::ResetToPattern => self.reset_to_pattern(),
            Intent::ResetToEmpty => self.reset_to_empty(),
            Intent::SetGridSize(size) => self.set_grid_size(size)?,
            Intent::SelectPattern(pattern) => self.select_pattern(pattern),
            Intent::LoadPattern(pattern) => self.load_pattern(pattern),
            Intent::StartTicking => self.start_ticking(now),
            Intent::StopTicking => self.stop_ticking(),
            Intent::SetTickSpeed(speed) => self.set_tick_speed(speed, now),
            Intent::ResetTickInterval => self.reset_tick_interval(now),
            Intent::SetRandomLife(active) => self.set_random_life(active),
            Intent::Randomize => self.randomize(),
            Intent::SetCurrentGeneration(generation) => self.set_current_generation(generation)?,
        }
        Ok(())
    }
}
