use serde::{Deserialize, Serialize};

/// Slowest end of the speed slider
pub const MIN_TICK_SPEED: u32 = 1;
/// Fastest end of the speed slider
pub const MAX_TICK_SPEED: u32 = 100;
/// Interval reduction per speed step
const MS_PER_SPEED_STEP: u64 = 10;

/// Board bounds and auto-tick timing limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Smallest allowed board edge
    pub min_grid_size: usize,
    /// Largest allowed board edge
    pub max_grid_size: usize,
    /// Board edge on startup
    pub initial_grid_size: usize,
    /// Interval at speed 0; faster speeds subtract from this
    pub max_tick_interval_ms: u64,
    /// Interval restored by `reset_tick_interval`
    pub default_tick_interval_ms: u64,
    /// Probability of a live cell when randomizing the board (0.0-1.0)
    pub random_density: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            min_grid_size: 10,
            max_grid_size: 25,
            initial_grid_size: 10,
            max_tick_interval_ms: 1000,
            default_tick_interval_ms: 500,
            random_density: 0.3,
        }
    }
}

impl SimulationSettings {
    /// Whether `size` lies inside the board bounds
    pub fn contains_grid_size(&self, size: usize) -> bool {
        (self.min_grid_size..=self.max_grid_size).contains(&size)
    }

    /// Clamp a board edge into the allowed bounds
    pub fn clamp_grid_size(&self, size: usize) -> usize {
        size.clamp(self.min_grid_size, self.max_grid_size)
    }

    /// Tick interval for a speed on the 1-100 scale (clamped)
    pub fn interval_for_speed(&self, speed: u32) -> u64 {
        let speed = speed.clamp(MIN_TICK_SPEED, MAX_TICK_SPEED) as u64;
        self.max_tick_interval_ms.saturating_sub(speed * MS_PER_SPEED_STEP)
    }

    /// Inverse of `interval_for_speed`, rounded to the nearest step
    pub fn speed_for_interval(&self, interval_ms: u64) -> u32 {
        let saved = self.max_tick_interval_ms.saturating_sub(interval_ms);
        let speed = (saved + MS_PER_SPEED_STEP / 2) / MS_PER_SPEED_STEP;
        (speed as u32).clamp(MIN_TICK_SPEED, MAX_TICK_SPEED)
    }

    /// Repair inconsistent values loaded from disk
    pub fn sanitized(mut self) -> Self {
        self.min_grid_size = self.min_grid_size.max(1);
        if self.max_grid_size < self.min_grid_size {
            self.max_grid_size = self.min_grid_size;
        }
        self.initial_grid_size = self.clamp_grid_size(self.initial_grid_size);
        self.default_tick_interval_ms = self.default_tick_interval_ms.min(self.max_tick_interval_ms);
        self.random_density = self.random_density.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SimulationSettings::default();
        assert_eq!(settings.min_grid_size, 10);
        assert_eq!(settings.max_grid_size, 25);
        assert_eq!(settings.max_tick_interval_ms, 1000);
        assert_eq!(settings.default_tick_interval_ms, 500);
    }

    #[test]
    fn test_interval_for_speed() {
        let settings = SimulationSettings::default();
        assert_eq!(settings.interval_for_speed(1), 990);
        assert_eq!(settings.interval_for_speed(50), 500);
        assert_eq!(settings.interval_for_speed(100), 0);
        // Out-of-range speeds clamp to the slider ends
        assert_eq!(settings.interval_for_speed(0), 990);
        assert_eq!(settings.interval_for_speed(500), 0);
    }

    #[test]
    fn test_speed_interval_inverse() {
        let settings = SimulationSettings::default();
        for speed in MIN_TICK_SPEED..=MAX_TICK_SPEED {
            let interval = settings.interval_for_speed(speed);
            assert_eq!(settings.speed_for_interval(interval), speed);
        }
    }

    #[test]
    fn test_grid_size_bounds() {
        let settings = SimulationSettings::default();
        assert!(!settings.contains_grid_size(5));
        assert!(settings.contains_grid_size(10));
        assert!(settings.contains_grid_size(25));
        assert!(!settings.contains_grid_size(26));
        assert_eq!(settings.clamp_grid_size(3), 10);
        assert_eq!(settings.clamp_grid_size(40), 25);
    }

    #[test]
    fn test_sanitized_repairs_bounds() {
        let settings = SimulationSettings {
            min_grid_size: 0,
            max_grid_size: 0,
            initial_grid_size: 50,
            max_tick_interval_ms: 300,
            default_tick_interval_ms: 900,
            random_density: 2.0,
        }
        .sanitized();
        assert_eq!(settings.min_grid_size, 1);
        assert_eq!(settings.max_grid_size, 1);
        assert_eq!(settings.initial_grid_size, 1);
        assert_eq!(settings.default_tick_interval_ms, 300);
        assert_eq!(settings.random_density, 1.0);
    }
}
