//! Fox and Geese: rule engine and console front end.
//!
//! This crate implements the asymmetric board game Fox and Geese, played on
//! the dark squares of an 8x8 board: twelve Geese advance diagonally and try
//! to trap the single Fox, which moves diagonally in any direction and
//! captures Geese by jumping over them.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and rule parameters
//! - [`board`] - Grid representation and playable-square geometry
//! - [`game`] - Core game logic (legality, application, win evaluation)
//! - [`cli`] - Interactive console turn loop
//!
//! ## Example
//!
//! ```
//! use fox_geese::game::{self, MoveKind, Outcome, Side};
//!
//! // Create a new game and advance a goose.
//! let mut state = game::new_game();
//! let kind = game::check_move(&state, Side::Geese, (2, 0), (3, 1)).unwrap();
//! assert_eq!(kind, MoveKind::Step);
//! game::apply_move(&mut state, (2, 0), (3, 1), kind);
//!
//! // The game has barely begun.
//! assert_eq!(game::evaluate_outcome(&state), Outcome::Ongoing);
//! assert_eq!(state.geese, 12);
//! ```

pub mod board;
pub mod cli;
pub mod constants;
pub mod game;
