//! Constants for board geometry and game rules.
//!
//! Fox and Geese is played on the dark squares of a fixed 8x8 board:
//! a square is playable when its row and column sum to an even number.
//! The light squares never hold a piece.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (8x8). The game is always played on the full board.
pub const BOARD_SIZE: usize = 8;

/// Rows initially filled with Geese (rows 0..GEESE_ROWS, dark squares only).
pub const GEESE_ROWS: usize = 3;

/// Starting square of the Fox.
pub const FOX_START: (usize, usize) = (7, 1);

// =============================================================================
// Rule Parameters
// =============================================================================

/// Number of Geese at the start of the game.
pub const GEESE_START: u32 = 12;

/// The Fox wins once the Goose count drops to this value or below
/// (seven or more Geese captured).
pub const FOX_WIN_GEESE: u32 = 5;

// =============================================================================
// Move Deltas
// =============================================================================

/// Diagonal single-step offsets, as (row, col) deltas.
/// Order: up-left, up-right, down-left, down-right.
pub const STEP_DELTAS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Diagonal jump offsets (two squares, over an adjacent Goose).
pub const JUMP_DELTAS: [(isize, isize); 4] = [(-2, -2), (-2, 2), (2, -2), (2, 2)];
