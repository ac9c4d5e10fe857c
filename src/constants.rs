//! Grid dimensions and fixed rule parameters.
//!
//! Both levels of the game share the same 3x3 geometry: a sub-board has
//! nine cells and the super-grid has nine sub-boards. Cells and boards are
//! addressed either by `(row, col)` or by a row-major index in `0..CELLS`.

use crate::types::Coord;

// =============================================================================
// Geometry
// =============================================================================

/// Side length of a sub-board and of the super-grid.
pub const SIDE: usize = 3;

/// Number of cells in a sub-board (and of sub-boards in the super-grid).
pub const CELLS: usize = SIDE * SIDE;

/// Total number of cells across the whole game.
pub const TOTAL_CELLS: usize = CELLS * CELLS;

/// Upper bound on the length of any game: every cell is written at most once.
pub const MAX_GAME_LEN: usize = TOTAL_CELLS;

// =============================================================================
// Opening rule
// =============================================================================

/// The sub-board X is forced into on the first move (the center board).
pub const OPENING_BOARD: Coord = Coord::new(1, 1);

// =============================================================================
// Protocol
// =============================================================================

/// Name reported by the `name` protocol command.
pub const ENGINE_NAME: &str = "ultimate-ttt";

/// Version of the line protocol spoken by [`crate::protocol`].
pub const PROTOCOL_VERSION: u32 = 1;
