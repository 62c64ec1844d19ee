use crate::generation::Generation;
use serde::{Deserialize, Serialize};

/// Preset seed layouts that can be loaded onto an empty board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternId {
    #[default]
    Empty,
    Glider,
    SmallExploder,
    Exploder,
    TenCellRow,
    LightweightSpaceship,
    Block,
    Tub,
    Boat,
}

/// Top-left position a pattern's offsets are measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    pub row: usize,
    pub col: usize,
}

impl Anchor {
    pub const ORIGIN: Anchor = Anchor { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

const SMALL_EXPLODER: &[(usize, usize)] = &[
    (0, 1),
    (1, 0), (1, 1), (1, 2),
    (2, 0), (2, 2),
    (3, 1),
];

const EXPLODER: &[(usize, usize)] = &[
    (0, 0), (0, 2), (0, 4),
    (1, 0), (1, 4),
    (2, 0), (2, 4),
    (3, 0), (3, 4),
    (4, 0), (4, 2), (4, 4),
];

const TEN_CELL_ROW: &[(usize, usize)] = &[
    (0, 0), (0, 1), (0, 2), (0, 3), (0, 4),
    (0, 5), (0, 6), (0, 7), (0, 8), (0, 9),
];

const LIGHTWEIGHT_SPACESHIP: &[(usize, usize)] = &[
    (0, 1), (0, 2), (0, 3), (0, 4),
    (1, 0), (1, 4),
    (2, 4),
    (3, 0), (3, 3),
];

const BLOCK: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

const TUB: &[(usize, usize)] = &[(0, 1), (1, 0), (1, 2), (2, 1)];

const BOAT: &[(usize, usize)] = &[(0, 1), (1, 0), (1, 2), (2, 1), (2, 2)];

impl PatternId {
    /// Every pattern, in menu order
    pub const ALL: [PatternId; 9] = [
        PatternId::Empty,
        PatternId::Glider,
        PatternId::SmallExploder,
        PatternId::Exploder,
        PatternId::TenCellRow,
        PatternId::LightweightSpaceship,
        PatternId::Block,
        PatternId::Tub,
        PatternId::Boat,
    ];

    /// Stable identifier used on the command line and in config files
    pub fn name(&self) -> &'static str {
        match self {
            PatternId::Empty => "empty",
            PatternId::Glider => "glider",
            PatternId::SmallExploder => "small-exploder",
            PatternId::Exploder => "exploder",
            PatternId::TenCellRow => "ten-cell-row",
            PatternId::LightweightSpaceship => "lightweight-spaceship",
            PatternId::Block => "block",
            PatternId::Tub => "tub",
            PatternId::Boat => "boat",
        }
    }

    /// Human-readable label for menus
    pub fn label(&self) -> &'static str {
        match self {
            PatternId::Empty => "Empty",
            PatternId::Glider => "Glider",
            PatternId::SmallExploder => "Small Exploder",
            PatternId::Exploder => "Exploder",
            PatternId::TenCellRow => "10 Cell Row",
            PatternId::LightweightSpaceship => "Lightweight Spaceship",
            PatternId::Block => "Block",
            PatternId::Tub => "Tub",
            PatternId::Boat => "Boat",
        }
    }

    pub fn next(&self) -> PatternId {
        match self {
            PatternId::Empty => PatternId::Glider,
            PatternId::Glider => PatternId::SmallExploder,
            PatternId::SmallExploder => PatternId::Exploder,
            PatternId::Exploder => PatternId::TenCellRow,
            PatternId::TenCellRow => PatternId::LightweightSpaceship,
            PatternId::LightweightSpaceship => PatternId::Block,
            PatternId::Block => PatternId::Tub,
            PatternId::Tub => PatternId::Boat,
            PatternId::Boat => PatternId::Empty,
        }
    }

    pub fn prev(&self) -> PatternId {
        match self {
            PatternId::Empty => PatternId::Boat,
            PatternId::Glider => PatternId::Empty,
            PatternId::SmallExploder => PatternId::Glider,
            PatternId::Exploder => PatternId::SmallExploder,
            PatternId::TenCellRow => PatternId::Exploder,
            PatternId::LightweightSpaceship => PatternId::TenCellRow,
            PatternId::Block => PatternId::LightweightSpaceship,
            PatternId::Tub => PatternId::Block,
            PatternId::Boat => PatternId::Tub,
        }
    }

    /// Look a pattern up by name, label or short alias.
    ///
    /// Unrecognized names fall back to [`PatternId::Empty`].
    pub fn from_name(name: &str) -> PatternId {
        let key: String = name
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == ' ' { '-' } else { c })
            .collect();

        match key.as_str() {
            "glider" => PatternId::Glider,
            "small-exploder" | "smallexploder" => PatternId::SmallExploder,
            "exploder" => PatternId::Exploder,
            "ten-cell-row" | "10-cell-row" | "tencellrow" | "row" => PatternId::TenCellRow,
            "lightweight-spaceship" | "lightweightspaceship" | "lwss" | "spaceship" => {
                PatternId::LightweightSpaceship
            }
            "block" => PatternId::Block,
            "tub" => PatternId::Tub,
            "boat" => PatternId::Boat,
            "empty" => PatternId::Empty,
            _ => {
                log::debug!("unknown pattern {:?}, using empty", name);
                PatternId::Empty
            }
        }
    }

    /// Live-cell offsets (row, col) relative to the anchor
    pub fn offsets(&self) -> &'static [(usize, usize)] {
        match self {
            PatternId::Empty => &[],
            PatternId::Glider => GLIDER,
            PatternId::SmallExploder => SMALL_EXPLODER,
            PatternId::Exploder => EXPLODER,
            PatternId::TenCellRow => TEN_CELL_ROW,
            PatternId::LightweightSpaceship => LIGHTWEIGHT_SPACESHIP,
            PatternId::Block => BLOCK,
            PatternId::Tub => TUB,
            PatternId::Boat => BOAT,
        }
    }
}

/// All patterns with their display labels
pub fn available() -> Vec<(PatternId, &'static str)> {
    PatternId::ALL.iter().map(|id| (*id, id.label())).collect()
}

/// Build a `size` x `size` board holding `id` at the top-left corner
pub fn generate(id: PatternId, size: usize) -> Generation {
    generate_at(id, size, Anchor::ORIGIN)
}

/// Build a `size` x `size` board holding `id` at `anchor`.
///
/// Cells that land outside the board are dropped.
pub fn generate_at(id: PatternId, size: usize, anchor: Anchor) -> Generation {
    let mut generation = Generation::empty(size);
    for &(dr, dc) in id.offsets() {
        let (Some(row), Some(col)) = (anchor.row.checked_add(dr), anchor.col.checked_add(dc)) else {
            continue;
        };
        if row < size && col < size {
            generation.set(row, col, true);
        }
    }
    generation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_layout() {
        let glider = generate(PatternId::Glider, 10);
        let live: Vec<_> = glider.live_cells().collect();
        assert_eq!(live, vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_pattern_cell_counts() {
        let expected = [
            (PatternId::Empty, 0),
            (PatternId::Glider, 5),
            (PatternId::SmallExploder, 7),
            (PatternId::Exploder, 12),
            (PatternId::TenCellRow, 10),
            (PatternId::LightweightSpaceship, 9),
            (PatternId::Block, 4),
            (PatternId::Tub, 4),
            (PatternId::Boat, 5),
        ];
        for (id, count) in expected {
            assert_eq!(generate(id, 10).count_live_cells(), count, "{:?}", id);
        }
    }

    #[test]
    fn test_ten_cell_row_fills_first_row() {
        let row = generate(PatternId::TenCellRow, 12);
        for col in 0..10 {
            assert!(row.get(0, col));
        }
        assert!(!row.get(0, 10));
        assert!(!row.get(1, 0));
    }

    #[test]
    fn test_out_of_bounds_cells_are_truncated() {
        // Anchor pushes the row past the right edge
        let row = generate_at(PatternId::TenCellRow, 10, Anchor::new(3, 5));
        assert_eq!(row.count_live_cells(), 5);

        let tiny = generate(PatternId::Exploder, 3);
        assert_eq!(tiny.size(), 3);
        assert_eq!(tiny.count_live_cells(), 4);
    }

    #[test]
    fn test_far_anchor_drops_cells_without_overflow() {
        let gone = generate_at(PatternId::Glider, 10, Anchor::new(usize::MAX, 0));
        assert!(gone.is_lifeless());

        let gone = generate_at(PatternId::TenCellRow, 10, Anchor::new(0, usize::MAX - 1));
        assert!(gone.is_lifeless());
        assert_eq!(gone.size(), 10);
    }

    #[test]
    fn test_anchor_offsets_shape() {
        let block = generate_at(PatternId::Block, 10, Anchor::new(4, 6));
        let live: Vec<_> = block.live_cells().collect();
        assert_eq!(live, vec![(4, 6), (4, 7), (5, 6), (5, 7)]);
    }

    #[test]
    fn test_unknown_name_falls_back_to_empty() {
        assert_eq!(PatternId::from_name("gosper-gun"), PatternId::Empty);
        assert_eq!(PatternId::from_name(""), PatternId::Empty);
    }

    #[test]
    fn test_name_lookup_accepts_labels_and_slugs() {
        for id in PatternId::ALL {
            assert_eq!(PatternId::from_name(id.name()), id);
        }
        assert_eq!(PatternId::from_name("Small Exploder"), PatternId::SmallExploder);
        assert_eq!(PatternId::from_name("LWSS"), PatternId::LightweightSpaceship);
        assert_eq!(PatternId::from_name("10 cell row"), PatternId::TenCellRow);
    }

    #[test]
    fn test_next_prev_cycle() {
        for id in PatternId::ALL {
            assert_eq!(id.next().prev(), id);
        }
        let mut id = PatternId::Empty;
        for _ in 0..PatternId::ALL.len() {
            id = id.next();
        }
        assert_eq!(id, PatternId::Empty);
    }

    #[test]
    fn test_available_lists_every_pattern() {
        let list = available();
        assert_eq!(list.len(), 9);
        assert_eq!(list[0], (PatternId::Empty, "Empty"));
        assert_eq!(list[5], (PatternId::LightweightSpaceship, "Lightweight Spaceship"));
    }

    #[test]
    fn test_serde_uses_slug_names() {
        let json = serde_json::to_string(&PatternId::SmallExploder).unwrap();
        assert_eq!(json, "\"small-exploder\"");
        let parsed: PatternId = serde_json::from_str("\"ten-cell-row\"").unwrap();
        assert_eq!(parsed, PatternId::TenCellRow);
    }
}
