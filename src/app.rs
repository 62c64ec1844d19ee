use std::time::Instant;
use torus_life::config::AppConfig;
use torus_life::patterns::PatternId;
use torus_life::settings::{MAX_TICK_SPEED, MIN_TICK_SPEED};
use torus_life::simulation::Simulation;

/// Speed change per +/- key press
const SPEED_STEP: i32 = 5;

/// Which sidebar item the arrow keys act on
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Focus {
    /// Arrows move the cell cursor
    #[default]
    Board,
    GridSize,
    Pattern,
    Speed,
    RandomLife,
}

impl Focus {
    pub fn next(&self) -> Focus {
        match self {
            Focus::Board => Focus::GridSize,
            Focus::GridSize => Focus::Pattern,
            Focus::Pattern => Focus::Speed,
            Focus::Speed => Focus::RandomLife,
            Focus::RandomLife => Focus::Board,
        }
    }

    pub fn prev(&self) -> Focus {
        match self {
            Focus::Board => Focus::RandomLife,
            Focus::GridSize => Focus::Board,
            Focus::Pattern => Focus::GridSize,
            Focus::Speed => Focus::Pattern,
            Focus::RandomLife => Focus::Speed,
        }
    }

    /// Check if focus is on a parameter rather than the board
    pub fn is_param(&self) -> bool {
        !matches!(self, Focus::Board)
    }
}

/// Main application state
pub struct App {
    pub simulation: Simulation,
    pub focus: Focus,
    /// Cell cursor as (row, col)
    pub cursor: (usize, usize),
    pub show_help: bool,
    pub help_scroll: u16,
    /// Last rejected action, shown in the status box
    pub message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig, now: Instant) -> Self {
        let mut simulation = Simulation::new(config.settings.clone());
        simulation.set_tick_speed(config.tick_speed, now);
        simulation.set_random_life(config.random_life);
        simulation.load_pattern(config.selected_pattern);
        Self {
            simulation,
            focus: Focus::Board,
            cursor: (0, 0),
            show_help: false,
            help_scroll: 0,
            message: None,
        }
    }

    /// Run the auto-tick policy for this frame
    pub fn update(&mut self, now: Instant) {
        self.simulation.poll_auto_tick(now);
    }

    /// Advance one generation by hand
    pub fn step(&mut self) {
        self.simulation.tick();
    }

    /// Start or stop auto-ticking
    pub fn toggle_ticking(&mut self, now: Instant) {
        if self.simulation.auto_ticking() {
            self.simulation.stop_ticking();
        } else {
            self.simulation.start_ticking(now);
        }
    }

    /// Move the cursor, wrapping around the board like the board itself
    pub fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let size = self.simulation.grid_size() as i32;
        let (row, col) = self.cursor;
        self.cursor = (
            (row as i32 + d_row).rem_euclid(size) as usize,
            (col as i32 + d_col).rem_euclid(size) as usize,
        );
    }

    pub fn toggle_at_cursor(&mut self) {
        let (row, col) = self.cursor;
        if let Err(err) = self.simulation.toggle_cell(row, col) {
            self.message = Some(err.to_string());
        }
    }

    /// Grow or shrink the board by `delta` cells per side
    pub fn adjust_grid_size(&mut self, delta: i32) {
        let requested = (self.simulation.grid_size() as i32 + delta).max(0) as usize;
        match self.simulation.set_grid_size(requested) {
            Ok(()) => {
                let last = requested - 1;
                self.cursor = (self.cursor.0.min(last), self.cursor.1.min(last));
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn adjust_speed(&mut self, delta: i32, now: Instant) {
        let speed = (self.simulation.tick_speed() as i32 + delta)
            .clamp(MIN_TICK_SPEED as i32, MAX_TICK_SPEED as i32) as u32;
        self.simulation.set_tick_speed(speed, now);
    }

    pub fn increase_speed(&mut self, now: Instant) {
        self.adjust_speed(SPEED_STEP, now);
    }

    pub fn decrease_speed(&mut self, now: Instant) {
        self.adjust_speed(-SPEED_STEP, now);
    }

    /// Select the next pattern without drawing it
    pub fn cycle_pattern(&mut self) {
        let next = self.simulation.selected_pattern().next();
        self.simulation.select_pattern(next);
    }

    pub fn cycle_pattern_prev(&mut self) {
        let prev = self.simulation.selected_pattern().prev();
        self.simulation.select_pattern(prev);
    }

    /// Load a pattern directly (1-8 keys)
    pub fn load_pattern(&mut self, pattern: PatternId) {
        self.simulation.load_pattern(pattern);
        self.message = None;
    }

    pub fn reset(&mut self) {
        self.simulation.reset_to_pattern();
        self.message = None;
    }

    pub fn reset_empty(&mut self) {
        self.simulation.reset_to_empty();
        self.message = None;
    }

    pub fn randomize(&mut self) {
        self.simulation.randomize();
    }

    pub fn toggle_random_life(&mut self) {
        self.simulation.toggle_random_life();
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Handle Up on the focused item
    pub fn adjust_focused_up(&mut self, now: Instant) {
        match self.focus {
            Focus::Board => self.move_cursor(-1, 0),
            Focus::GridSize => self.adjust_grid_size(1),
            Focus::Pattern => self.cycle_pattern(),
            Focus::Speed => self.increase_speed(now),
            Focus::RandomLife => self.toggle_random_life(),
        }
    }

    /// Handle Down on the focused item
    pub fn adjust_focused_down(&mut self, now: Instant) {
        match self.focus {
            Focus::Board => self.move_cursor(1, 0),
            Focus::GridSize => self.adjust_grid_size(-1),
            Focus::Pattern => self.cycle_pattern_prev(),
            Focus::Speed => self.decrease_speed(now),
            Focus::RandomLife => self.toggle_random_life(),
        }
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.help_scroll = 0;
        }
    }

    pub fn scroll_help_up(&mut self) {
        self.help_scroll = self.help_scroll.saturating_sub(1);
    }

    pub fn scroll_help_down(&mut self, max_scroll: u16) {
        self.help_scroll = (self.help_scroll + 1).min(max_scroll);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&AppConfig::default(), Instant::now())
    }

    #[test]
    fn test_cursor_wraps() {
        let mut app = app();
        app.move_cursor(-1, -1);
        assert_eq!(app.cursor, (9, 9));
        app.move_cursor(1, 2);
        assert_eq!(app.cursor, (0, 1));
    }

    #[test]
    fn test_shrink_below_minimum_reports_error() {
        let mut app = app();
        app.adjust_grid_size(-1);
        assert_eq!(app.simulation.grid_size(), 10);
        assert!(app.message.is_some());

        app.adjust_grid_size(1);
        assert_eq!(app.simulation.grid_size(), 11);
        assert!(app.message.is_none());
    }

    #[test]
    fn test_cursor_follows_shrink() {
        let mut app = app();
        app.adjust_grid_size(5);
        app.cursor = (14, 14);
        app.adjust_grid_size(-3);
        assert_eq!(app.cursor, (11, 11));
    }

    #[test]
    fn test_speed_keys_clamp() {
        let now = Instant::now();
        let mut app = app();
        for _ in 0..30 {
            app.increase_speed(now);
        }
        assert_eq!(app.simulation.tick_speed(), 100);
        for _ in 0..30 {
            app.decrease_speed(now);
        }
        assert_eq!(app.simulation.tick_speed(), 1);
    }

    #[test]
    fn test_toggle_ticking() {
        let now = Instant::now();
        let mut app = app();
        app.toggle_ticking(now);
        assert!(app.simulation.auto_ticking());
        app.toggle_ticking(now);
        assert!(!app.simulation.auto_ticking());
    }

    #[test]
    fn test_cycle_pattern_selects_only() {
        let mut app = app();
        app.cycle_pattern();
        assert_eq!(app.simulation.selected_pattern(), PatternId::Glider);
        assert_eq!(app.simulation.live_cell_count(), 0);
        app.reset();
        assert_eq!(app.simulation.live_cell_count(), 5);
    }
}
