//! Fox and Geese rules: move legality, move application, and win evaluation.
//!
//! This module provides the core game logic:
//! - Initial piece placement (twelve Geese, one Fox)
//! - Move legality checking for both sides, including Fox capture jumps
//! - Move application with Goose removal on captures
//! - Win evaluation (Fox wins on captures, Geese win by trapping the Fox)
//! - Legal move enumeration for a square or a whole side
//!
//! All rule functions are free functions over a [`GameState`]. The legality
//! checker takes the moving side as an explicit parameter, so the same
//! function serves both real move validation and the speculative mobility
//! probe the win evaluator runs for the Fox.

use crate::board::{Board, Cell, Square, is_playable, offset};
use crate::constants::{
    BOARD_SIZE, FOX_START, FOX_WIN_GEESE, GEESE_ROWS, GEESE_START, JUMP_DELTAS, STEP_DELTAS,
};
use std::fmt;

/// The two sides of the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Geese,
    Fox,
}

impl Side {
    /// The opposing side.
    pub fn other(self) -> Side {
        match self {
            Side::Geese => Side::Fox,
            Side::Fox => Side::Geese,
        }
    }

    /// The cell value this side's pieces occupy.
    pub fn piece(self) -> Cell {
        match self {
            Side::Geese => Cell::Goose,
            Side::Fox => Cell::Fox,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Side::Geese => "Geese",
            Side::Fox => "Fox",
        }
    }
}

/// How a legal move transports its piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// One diagonal step onto an empty square.
    Step,
    /// A Fox jump over an adjacent Goose, capturing it.
    Jump,
}

/// A validated or enumerated move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} {}",
            self.from.0, self.from.1, self.to.0, self.to.1
        )?;
        if self.kind == MoveKind::Jump {
            write!(f, " (capture)")?;
        }
        Ok(())
    }
}

/// Why a candidate move was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// A coordinate is off the board or on a light square
    OffBoard,
    /// The starting square does not hold the moving side's piece
    NotYourPiece,
    /// The destination square is not empty
    Occupied,
    /// The step geometry is not allowed for this piece
    BadDirection,
    /// A Fox jump whose midpoint square holds no Goose
    NothingToJump,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OffBoard => write!(f, "not a playable square"),
            MoveError::NotYourPiece => write!(f, "no piece of yours on the starting square"),
            MoveError::Occupied => write!(f, "destination square is not empty"),
            MoveError::BadDirection => write!(f, "that piece cannot move that way"),
            MoveError::NothingToJump => write!(f, "no goose to jump over"),
        }
    }
}

/// Result of evaluating a position for termination.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    FoxWins,
    GeeseWin,
}

/// Full game state.
///
/// The Geese move first. `over` is set by the turn loop once
/// [`evaluate_outcome`] reports a terminal outcome; after that the state is
/// not mutated again.
#[derive(Clone)]
pub struct GameState {
    /// Piece placement
    pub board: Board,
    /// Side to move
    pub to_move: Side,
    /// Geese remaining on the board
    pub geese: u32,
    /// Whether the game has ended
    pub over: bool,
    /// Most recently applied move
    pub last: Option<Move>,
    /// Number of moves applied so far
    pub n: usize,
}

impl GameState {
    pub fn new() -> Self {
        new_game()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the fixed initial position: Geese on every dark square of the
/// first three rows, the Fox on its starting square, Geese to move.
pub fn new_game() -> GameState {
    let mut board = Board::new();
    for row in 0..GEESE_ROWS {
        for col in 0..BOARD_SIZE {
            if (row + col) % 2 == 0 {
                board.set((row, col), Cell::Goose);
            }
        }
    }
    board.set(FOX_START, Cell::Fox);
    GameState {
        board,
        to_move: Side::Geese,
        geese: GEESE_START,
        over: false,
        last: None,
        n: 0,
    }
}

/// Midpoint of a two-square diagonal jump. Both deltas are even, so the
/// division is exact.
fn midpoint(from: Square, to: Square) -> Square {
    ((from.0 + to.0) / 2, (from.1 + to.1) / 2)
}

/// Check whether `side` may move a piece from `from` to `to`.
///
/// Pure: never mutates the state, so it can be called speculatively. The
/// moving side is an explicit parameter rather than being read from
/// `state.to_move`; the win evaluator relies on this to probe Fox mobility
/// on the Geese's turn.
///
/// # Errors
/// - [`MoveError::OffBoard`] - a coordinate is out of bounds or on a light square
/// - [`MoveError::NotYourPiece`] - the starting square lacks the side's piece
/// - [`MoveError::Occupied`] - the destination is not empty
/// - [`MoveError::BadDirection`] - the geometry is illegal for the piece
/// - [`MoveError::NothingToJump`] - a Fox jump with no Goose on the midpoint
pub fn check_move(
    state: &GameState,
    side: Side,
    from: Square,
    to: Square,
) -> Result<MoveKind, MoveError> {
    if !is_playable(from) || !is_playable(to) {
        return Err(MoveError::OffBoard);
    }
    if state.board.get(from) != Some(side.piece()) {
        return Err(MoveError::NotYourPiece);
    }
    if state.board.get(to) != Some(Cell::Empty) {
        return Err(MoveError::Occupied);
    }

    let row_diff = (to.0 as isize - from.0 as isize).abs();
    let col_diff = (to.1 as isize - from.1 as isize).abs();

    match side {
        // Geese advance one row, strictly diagonally, never backward or sideways.
        Side::Geese => {
            if to.0 == from.0 + 1 && col_diff == 1 {
                Ok(MoveKind::Step)
            } else {
                Err(MoveError::BadDirection)
            }
        }
        Side::Fox => {
            if row_diff == 1 && col_diff == 1 {
                Ok(MoveKind::Step)
            } else if row_diff == 2 && col_diff == 2 {
                if state.board.get(midpoint(from, to)) == Some(Cell::Goose) {
                    Ok(MoveKind::Jump)
                } else {
                    Err(MoveError::NothingToJump)
                }
            } else {
                Err(MoveError::BadDirection)
            }
        }
    }
}

/// Apply a move that [`check_move`] already validated for the side to move.
///
/// No legality re-checking happens here. The piece is transported from
/// `from` to `to`; a [`MoveKind::Jump`] additionally clears the jumped-over
/// square and decrements the Goose count by one. The outcome is not
/// evaluated and the turn is not flipped; those are separate steps of the
/// turn loop.
pub fn apply_move(state: &mut GameState, from: Square, to: Square, kind: MoveKind) {
    let piece = state.board.take(from);
    state.board.set(to, piece);
    if kind == MoveKind::Jump {
        state.board.set(midpoint(from, to), Cell::Empty);
        state.geese -= 1;
    }
    state.last = Some(Move { from, to, kind });
    state.n += 1;
}

/// Locate the Fox on the board.
///
/// Returns `None` if no Fox is present. That cannot arise under the rules
/// (the Fox is never captured), but the evaluator must tolerate it.
pub fn find_fox(state: &GameState) -> Option<Square> {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if state.board.get((row, col)) == Some(Cell::Fox) {
                return Some((row, col));
            }
        }
    }
    None
}

/// Whether the Fox has any legal move from its current square.
///
/// Probes the four single-step diagonals first and, only if all fail, the
/// four jump diagonals, each through [`check_move`] with [`Side::Fox`]
/// passed explicitly. A missing Fox counts as having no moves.
pub fn fox_has_move(state: &GameState) -> bool {
    let Some(fox) = find_fox(state) else {
        return false;
    };
    for deltas in [STEP_DELTAS, JUMP_DELTAS] {
        for delta in deltas {
            if let Some(to) = offset(fox, delta) {
                if check_move(state, Side::Fox, fox, to).is_ok() {
                    return true;
                }
            }
        }
    }
    false
}

/// Evaluate whether the game has ended and for whom.
///
/// The Fox wins as soon as the Goose count reaches [`FOX_WIN_GEESE`] or
/// below, regardless of whose turn it is. The Geese win when the Fox has no
/// legal move *and* it is the Fox's turn: a Fox immobilized on the Geese's
/// turn is not yet lost, because the Geese's next move may free it.
///
/// Read-only: the board and the turn indicator are left untouched.
pub fn evaluate_outcome(state: &GameState) -> Outcome {
    if state.geese <= FOX_WIN_GEESE {
        return Outcome::FoxWins;
    }
    if state.to_move == Side::Fox && !fox_has_move(state) {
        return Outcome::GeeseWin;
    }
    Outcome::Ongoing
}

/// Every legal move for the piece on `from`.
///
/// Returns an empty vector if the square is empty, unplayable, or holds a
/// piece with nowhere to go. Geese are only probed on their two forward
/// diagonals; the Fox on all four step and four jump diagonals.
pub fn legal_moves_from(state: &GameState, from: Square) -> Vec<Move> {
    let side = match state.board.get(from) {
        Some(Cell::Goose) => Side::Geese,
        Some(Cell::Fox) => Side::Fox,
        _ => return Vec::new(),
    };
    let mut moves = Vec::new();
    let deltas: &[(isize, isize)] = match side {
        Side::Geese => &[(1, -1), (1, 1)],
        Side::Fox => &STEP_DELTAS,
    };
    for &delta in deltas {
        if let Some(to) = offset(from, delta) {
            if let Ok(kind) = check_move(state, side, from, to) {
                moves.push(Move { from, to, kind });
            }
        }
    }
    if side == Side::Fox {
        for delta in JUMP_DELTAS {
            if let Some(to) = offset(from, delta) {
                if let Ok(kind) = check_move(state, side, from, to) {
                    moves.push(Move { from, to, kind });
                }
            }
        }
    }
    moves
}

/// Every legal move available to a side.
pub fn legal_moves(state: &GameState, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if state.board.get((row, col)) == Some(side.piece()) {
                moves.extend(legal_moves_from(state, (row, col)));
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_placement() {
        let state = new_game();
        assert_eq!(state.geese, GEESE_START);
        assert_eq!(state.board.count_geese(), GEESE_START);
        assert_eq!(state.board.get(FOX_START), Some(Cell::Fox));
        assert_eq!(state.to_move, Side::Geese);
        assert!(!state.over);

        // Geese fill exactly the dark squares of the first three rows.
        for row in 0..GEESE_ROWS {
            for col in 0..BOARD_SIZE {
                let expected = if (row + col) % 2 == 0 {
                    Cell::Goose
                } else {
                    Cell::Empty
                };
                assert_eq!(state.board.get((row, col)), Some(expected));
            }
        }
    }

    #[test]
    fn test_goose_moves_forward_only() {
        let state = new_game();
        assert_eq!(
            check_move(&state, Side::Geese, (2, 4), (3, 3)),
            Ok(MoveKind::Step)
        );
        assert_eq!(
            check_move(&state, Side::Geese, (2, 4), (3, 5)),
            Ok(MoveKind::Step)
        );
        // Backward and sideways are rejected even onto empty dark squares.
        let mut state = state;
        state.board.set((2, 4), Cell::Empty);
        state.board.set((4, 4), Cell::Goose);
        assert_eq!(
            check_move(&state, Side::Geese, (4, 4), (3, 3)),
            Err(MoveError::BadDirection)
        );
        assert_eq!(
            check_move(&state, Side::Geese, (4, 4), (6, 6)),
            Err(MoveError::BadDirection)
        );
    }

    #[test]
    fn test_rejects_unplayable_squares() {
        let state = new_game();
        assert_eq!(
            check_move(&state, Side::Geese, (2, 0), (3, 0)),
            Err(MoveError::OffBoard) // light square
        );
        assert_eq!(
            check_move(&state, Side::Fox, (7, 1), (8, 2)),
            Err(MoveError::OffBoard)
        );
    }

    #[test]
    fn test_rejects_wrong_piece_and_occupied() {
        let state = new_game();
        // Geese trying to move the Fox, and vice versa.
        assert_eq!(
            check_move(&state, Side::Geese, (7, 1), (6, 2)),
            Err(MoveError::NotYourPiece)
        );
        assert_eq!(
            check_move(&state, Side::Fox, (2, 0), (3, 1)),
            Err(MoveError::NotYourPiece)
        );
        // Empty source square.
        assert_eq!(
            check_move(&state, Side::Fox, (4, 4), (3, 3)),
            Err(MoveError::NotYourPiece)
        );
        // Occupied destination.
        assert_eq!(
            check_move(&state, Side::Geese, (1, 1), (2, 2)),
            Err(MoveError::Occupied)
        );
    }

    #[test]
    fn test_fox_steps_any_diagonal() {
        let mut state = new_game();
        state.board.set((7, 1), Cell::Empty);
        state.board.set((4, 4), Cell::Fox);
        for to in [(3, 3), (3, 5), (5, 3), (5, 5)] {
            assert_eq!(check_move(&state, Side::Fox, (4, 4), to), Ok(MoveKind::Step));
        }
        assert_eq!(
            check_move(&state, Side::Fox, (4, 4), (6, 6)),
            Err(MoveError::NothingToJump)
        );
        // Straight-line and longer deltas are never legal.
        assert_eq!(
            check_move(&state, Side::Fox, (4, 4), (4, 6)),
            Err(MoveError::BadDirection)
        );
        assert_eq!(
            check_move(&state, Side::Fox, (4, 4), (7, 7)),
            Err(MoveError::BadDirection)
        );
    }

    #[test]
    fn test_fox_jump_requires_goose() {
        let mut state = new_game();
        state.board.set((7, 1), Cell::Empty);
        state.board.set((4, 4), Cell::Fox);
        state.board.set((3, 3), Cell::Goose);
        assert_eq!(
            check_move(&state, Side::Fox, (4, 4), (2, 2)),
            Ok(MoveKind::Jump)
        );
        assert_eq!(
            check_move(&state, Side::Fox, (4, 4), (2, 6)),
            Err(MoveError::NothingToJump)
        );
    }

    #[test]
    fn test_apply_step_and_jump() {
        let mut state = new_game();
        apply_move(&mut state, (2, 2), (3, 3), MoveKind::Step);
        assert_eq!(state.board.get((2, 2)), Some(Cell::Empty));
        assert_eq!(state.board.get((3, 3)), Some(Cell::Goose));
        assert_eq!(state.geese, GEESE_START);
        assert_eq!(state.n, 1);
        assert_eq!(
            state.last,
            Some(Move {
                from: (2, 2),
                to: (3, 3),
                kind: MoveKind::Step
            })
        );

        // Set up a jump: Fox at (4,4) takes the Goose at (3,3).
        state.board.set((7, 1), Cell::Empty);
        state.board.set((4, 4), Cell::Fox);
        apply_move(&mut state, (4, 4), (2, 2), MoveKind::Jump);
        assert_eq!(state.board.get((2, 2)), Some(Cell::Fox));
        assert_eq!(state.board.get((3, 3)), Some(Cell::Empty));
        assert_eq!(state.board.get((4, 4)), Some(Cell::Empty));
        assert_eq!(state.geese, GEESE_START - 1);
        assert_eq!(state.n, 2);
    }

    #[test]
    fn test_check_move_does_not_mutate() {
        let state = new_game();
        let snapshot = state.clone();
        for _ in 0..3 {
            assert_eq!(
                check_move(&state, Side::Fox, (7, 1), (7, 3)),
                Err(MoveError::BadDirection)
            );
        }
        assert!(state.board == snapshot.board);
        assert_eq!(state.geese, snapshot.geese);
        assert_eq!(state.to_move, snapshot.to_move);
    }

    #[test]
    fn test_fresh_game_is_ongoing() {
        let state = new_game();
        assert_eq!(evaluate_outcome(&state), Outcome::Ongoing);
        assert!(fox_has_move(&state));
    }

    #[test]
    fn test_fox_wins_at_threshold() {
        let mut state = new_game();
        state.geese = FOX_WIN_GEESE;
        assert_eq!(evaluate_outcome(&state), Outcome::FoxWins);
        // Checked first, regardless of turn or Fox mobility.
        state.to_move = Side::Fox;
        assert_eq!(evaluate_outcome(&state), Outcome::FoxWins);
    }

    #[test]
    fn test_trapped_fox_loses_only_on_its_turn() {
        let mut state = new_game();
        state.board = Board::new();
        // Fox in the corner: its only on-board step diagonal holds a Goose
        // and the only jump landing is occupied too. Enough Geese elsewhere
        // to stay above the capture threshold.
        state.board.set((0, 0), Cell::Fox);
        state.board.set((1, 1), Cell::Goose);
        state.board.set((2, 2), Cell::Goose);
        for sq in [(0, 2), (0, 4), (0, 6), (2, 6)] {
            state.board.set(sq, Cell::Goose);
        }
        state.geese = state.board.count_geese();
        assert!(state.geese > FOX_WIN_GEESE);

        state.to_move = Side::Geese;
        assert_eq!(evaluate_outcome(&state), Outcome::Ongoing);
        state.to_move = Side::Fox;
        assert_eq!(evaluate_outcome(&state), Outcome::GeeseWin);
    }

    #[test]
    fn test_missing_fox_counts_as_immobile() {
        let mut state = new_game();
        state.board.set(FOX_START, Cell::Empty);
        assert_eq!(find_fox(&state), None);
        assert!(!fox_has_move(&state));
        state.to_move = Side::Fox;
        assert_eq!(evaluate_outcome(&state), Outcome::GeeseWin);
    }

    #[test]
    fn test_legal_moves_from_goose_and_fox() {
        let state = new_game();
        // A front-row Goose has both forward diagonals open.
        let moves = legal_moves_from(&state, (2, 4));
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.kind == MoveKind::Step));

        // The Fox at its start has two open step diagonals, no jumps.
        let moves = legal_moves_from(&state, FOX_START);
        assert_eq!(moves.len(), 2);

        // Empty and light squares enumerate nothing.
        assert!(legal_moves_from(&state, (4, 4)).is_empty());
        assert!(legal_moves_from(&state, (4, 5)).is_empty());
    }

    #[test]
    fn test_enumeration_agrees_with_checker() {
        let state = new_game();
        for side in [Side::Geese, Side::Fox] {
            for mv in legal_moves(&state, side) {
                assert_eq!(check_move(&state, side, mv.from, mv.to), Ok(mv.kind));
            }
        }
    }

    #[test]
    fn test_move_display() {
        let step = Move {
            from: (6, 2),
            to: (5, 3),
            kind: MoveKind::Step,
        };
        assert_eq!(step.to_string(), "6 2 -> 5 3");
        let jump = Move {
            from: (4, 4),
            to: (2, 2),
            kind: MoveKind::Jump,
        };
        assert_eq!(jump.to_string(), "4 4 -> 2 2 (capture)");
    }
}
