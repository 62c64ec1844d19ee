use crate::error::SimulationError;
use rand::seq::IteratorRandom;
use rand::Rng;

/// Rejection-sampling attempts before `inject_random_life` scans for dead cells
pub const MAX_RANDOM_LIFE_ATTEMPTS: usize = 64;

/// Moore neighborhood as (row, col) deltas
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// One snapshot of a square board.
///
/// Cells are stored row-major in a single buffer of `size * size` entries, so
/// every row always has exactly `size` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    size: usize,
    cells: Vec<bool>,
}

impl Generation {
    /// All-dead board of the given size
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Build a board from explicit rows, rejecting non-square input
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, SimulationError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(SimulationError::JaggedGeneration {
                    row,
                    len: values.len(),
                    size,
                });
            }
            cells.extend(values);
        }
        Ok(Self { size, cells })
    }

    /// Random board where each cell is alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(size: usize, density: f64, rng: &mut R) -> Self {
        let density = density.clamp(0.0, 1.0);
        Self {
            size,
            cells: (0..size * size).map(|_| rng.gen_bool(density)).collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Cell state at (row, col); anything off the board reads as dead
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[self.index(row, col)]
    }

    /// In-place write used by the pattern builders and random life
    pub(crate) fn set(&mut self, row: usize, col: usize, alive: bool) {
        if row < self.size && col < self.size {
            let idx = self.index(row, col);
            self.cells[idx] = alive;
        }
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// Coordinates of every live cell in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(idx, _)| (idx / size, idx % size))
    }

    pub fn count_live_cells(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// True when no cell is alive
    pub fn is_lifeless(&self) -> bool {
        !self.cells.iter().any(|alive| *alive)
    }

    /// Count live neighbors, wrapping rows and columns around the board edges
    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let n = self.size as i32;
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| {
                let nr = (row as i32 + dr).rem_euclid(n) as usize;
                let nc = (col as i32 + dc).rem_euclid(n) as usize;
                self.cells[self.index(nr, nc)]
            })
            .count() as u8
    }

    /// Apply the B3/S23 rule once and return the next generation
    pub fn advance(&self) -> Generation {
        let cells = (0..self.size * self.size)
            .map(|idx| {
                let (row, col) = (idx / self.size, idx % self.size);
                let neighbors = self.count_live_neighbors(row, col);
                matches!((self.cells[idx], neighbors), (true, 2) | (_, 3))
            })
            .collect();

        Generation {
            size: self.size,
            cells,
        }
    }

    /// Copy of this board with one cell flipped
    pub fn toggle_cell(&self, row: usize, col: usize) -> Result<Generation, SimulationError> {
        if row >= self.size || col >= self.size {
            return Err(SimulationError::InvalidIndex {
                row,
                col,
                size: self.size,
            });
        }
        let mut next = self.clone();
        let idx = next.index(row, col);
        next.cells[idx] = !next.cells[idx];
        Ok(next)
    }

    /// Crop or pad to `new_size`, keeping the top-left corner fixed.
    ///
    /// Overlapping cells are copied, new cells start dead.
    pub fn resize(&self, new_size: usize) -> Generation {
        let keep = self.size.min(new_size);
        let mut resized = Generation::empty(new_size);
        for row in 0..keep {
            let src = self.index(row, 0);
            let dst = resized.index(row, 0);
            resized.cells[dst..dst + keep].copy_from_slice(&self.cells[src..src + keep]);
        }
        resized
    }

    /// Bring one uniformly chosen dead cell to life.
    ///
    /// Tries random coordinates first, then picks among the remaining dead
    /// cells directly. Returns `None` without changing anything when every
    /// cell is already alive.
    pub fn inject_random_life<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, usize)> {
        if self.size == 0 {
            return None;
        }

        for _ in 0..MAX_RANDOM_LIFE_ATTEMPTS {
            let row = rng.gen_range(0..self.size);
            let col = rng.gen_range(0..self.size);
            if !self.get(row, col) {
                self.set(row, col, true);
                return Some((row, col));
            }
        }

        let idx = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| !**alive)
            .map(|(idx, _)| idx)
            .choose(rng)?;
        self.cells[idx] = true;
        Some((idx / self.size, idx % self.size))
    }
}
