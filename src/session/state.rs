//! The game session: one puzzle from generation to completion.
//!
//! A `Session` owns the board, the selection, the undo history, and the
//! status machine: `Playing -> Complete` (terminal) or `Playing -> Stuck`,
//! with `Stuck -> Playing` via undo. Reset and difficulty changes replace
//! the puzzle wholesale and return the status to `Playing`.
//!
//! The session is single-threaded and synchronous. Moves are atomic at the
//! data-model level; animation timing and the one-mutation-at-a-time lock
//! during animations belong to the presentation layer.
//!
//! ## Usage
//!
//! ```
//! use stacksort::catalog::KindCatalog;
//! use stacksort::core::Difficulty;
//! use stacksort::session::{ClickOutcome, Session};
//!
//! let catalog = KindCatalog::builtin();
//! let mut session = Session::with_seed(&catalog, Difficulty::Easy, 42).unwrap();
//!
//! // First click selects a non-empty stack
//! match session.click_stack(0) {
//!     ClickOutcome::Selected { stack } => assert_eq!(stack, 0),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//!
//! // Clicking it again deselects
//! assert_eq!(session.click_stack(0), ClickOutcome::Deselected);
//! ```

use tracing::debug;

use crate::board::Board;
use crate::catalog::KindCatalog;
use crate::core::{Difficulty, DifficultyProfile, KindId, PuzzleRng};
use crate::engine::{self, MoveHistory};
use crate::error::{GenerateError, MoveError, UndoError};
use crate::evaluator::{evaluate, BoardStatus};
use crate::generator::generate;

use super::outcome::{ClickOutcome, MoveApplied, UndoApplied};

/// One running puzzle.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    kinds: Vec<KindId>,
    profile: DifficultyProfile,
    selected: Option<usize>,
    history: MoveHistory,
    status: BoardStatus,
    solved_notified: bool,
    rng: PuzzleRng,
}

impl Session {
    /// Start a session with an entropy-drawn seed.
    ///
    /// The drawn seed is reported by [`seed`](Self::seed) so the session
    /// can still be reproduced.
    pub fn new(catalog: &KindCatalog, difficulty: Difficulty) -> Result<Self, GenerateError> {
        Self::with_seed(catalog, difficulty, PuzzleRng::from_entropy().seed())
    }

    /// Start a session with an explicit seed.
    pub fn with_seed(
        catalog: &KindCatalog,
        difficulty: Difficulty,
        seed: u64,
    ) -> Result<Self, GenerateError> {
        Self::with_profile(catalog, difficulty.profile(), seed)
    }

    /// Start a session with a custom profile.
    pub fn with_profile(
        catalog: &KindCatalog,
        profile: DifficultyProfile,
        seed: u64,
    ) -> Result<Self, GenerateError> {
        let mut rng = PuzzleRng::new(seed);
        let kinds = catalog.select_kinds(&profile, &mut rng)?;
        let board = generate(&kinds, &profile, &mut rng)?;

        let status = evaluate(&board);
        debug!(seed, difficulty = %profile.difficulty, "session started");

        Ok(Self {
            board,
            kinds,
            profile,
            selected: None,
            history: MoveHistory::new(),
            status,
            solved_notified: status == BoardStatus::Complete,
            rng,
        })
    }

    /// Replace the puzzle with a fresh one at the same difficulty.
    ///
    /// Kinds are re-selected, the history is discarded, and the status
    /// machine returns to `Playing`. The session's RNG stream continues,
    /// so a session replayed from its seed reproduces its resets too.
    pub fn reset(&mut self, catalog: &KindCatalog) -> Result<(), GenerateError> {
        let kinds = catalog.select_kinds(&self.profile, &mut self.rng)?;
        let board = generate(&kinds, &self.profile, &mut self.rng)?;
        self.install(self.profile, kinds, board);
        debug!(difficulty = %self.profile.difficulty, "session reset");
        Ok(())
    }

    /// Switch difficulty and start a fresh puzzle.
    ///
    /// On failure (e.g. the catalog is too small for the new tier) the
    /// session keeps its current puzzle and difficulty.
    pub fn set_difficulty(
        &mut self,
        catalog: &KindCatalog,
        difficulty: Difficulty,
    ) -> Result<(), GenerateError> {
        let profile = difficulty.profile();
        let kinds = catalog.select_kinds(&profile, &mut self.rng)?;
        let board = generate(&kinds, &profile, &mut self.rng)?;
        self.install(profile, kinds, board);
        debug!(difficulty = %profile.difficulty, "difficulty changed");
        Ok(())
    }

    fn install(&mut self, profile: DifficultyProfile, kinds: Vec<KindId>, board: Board) {
        self.status = evaluate(&board);
        self.solved_notified = self.status == BoardStatus::Complete;
        self.board = board;
        self.kinds = kinds;
        self.profile = profile;
        self.selected = None;
        self.history.clear();
    }

    /// Handle a stack click from the presentation layer.
    ///
    /// With no selection, clicking a non-empty stack selects it. With a
    /// selection, clicking the same stack deselects, and clicking another
    /// attempts the move; either way the selection is cleared. Clicks on a
    /// completed session are ignored.
    pub fn click_stack(&mut self, index: usize) -> ClickOutcome {
        if self.status == BoardStatus::Complete {
            return ClickOutcome::Ignored;
        }
        if index >= self.board.stack_count() {
            self.selected = None;
            return ClickOutcome::Rejected {
                reason: MoveError::NoSuchStack(index),
            };
        }

        match self.selected.take() {
            None => {
                if self.board[index].is_empty() {
                    ClickOutcome::Ignored
                } else {
                    self.selected = Some(index);
                    ClickOutcome::Selected { stack: index }
                }
            }
            Some(from) if from == index => ClickOutcome::Deselected,
            Some(from) => match self.apply_move(from, index) {
                Ok(applied) => ClickOutcome::Moved(applied),
                Err(reason) => ClickOutcome::Rejected { reason },
            },
        }
    }

    /// Attempt a move directly, bypassing the selection protocol.
    ///
    /// Clears any pending selection first.
    pub fn try_move(&mut self, from: usize, to: usize) -> Result<MoveApplied, MoveError> {
        self.selected = None;
        self.apply_move(from, to)
    }

    fn apply_move(&mut self, from: usize, to: usize) -> Result<MoveApplied, MoveError> {
        let outcome = engine::try_move(&mut self.board, from, to)?;
        self.history.push(outcome.record);

        // Complete is terminal; the status never leaves it except via reset
        if self.status != BoardStatus::Complete {
            self.status = evaluate(&self.board);
        }

        let just_completed = self.status == BoardStatus::Complete && !self.solved_notified;
        if just_completed {
            self.solved_notified = true;
            debug!(moves = self.history.len(), "puzzle solved");
        }

        Ok(MoveApplied {
            record: outcome.record,
            items: outcome.items,
            board: self.board.clone(),
            status: self.status,
            just_completed,
        })
    }

    /// Undo the most recent move.
    ///
    /// Restores the exact prior board and clears a stuck state. Refused on
    /// an empty history or a completed puzzle.
    pub fn undo(&mut self) -> Result<UndoApplied, UndoError> {
        if self.status == BoardStatus::Complete {
            return Err(UndoError::AlreadyComplete);
        }
        let record = self.history.pop().ok_or(UndoError::NoHistory)?;

        let items = engine::undo_move(&mut self.board, &record);
        self.selected = None;
        self.status = evaluate(&self.board);

        Ok(UndoApplied {
            record,
            items,
            board: self.board.clone(),
            status: self.status,
        })
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The kinds in play, in selection order.
    #[must_use]
    pub fn kinds(&self) -> &[KindId] {
        &self.kinds
    }

    /// The profile this session was generated with.
    #[must_use]
    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    /// Index of the currently selected stack, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The undo history, oldest move first.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Number of accepted moves still on the history (undo decrements).
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> BoardStatus {
        self.status
    }

    /// True once the puzzle is solved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == BoardStatus::Complete
    }

    /// True while no legal move exists and the puzzle is unsolved.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        self.status == BoardStatus::Stuck
    }

    /// The seed this session started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Wrap an arbitrary board, for exercising states the generator never
    /// produces directly (e.g. one move away from stuck).
    #[cfg(test)]
    fn from_board(board: Board) -> Self {
        let kinds = board.kinds_in_play();
        let status = evaluate(&board);
        Self {
            board,
            kinds,
            profile: DifficultyProfile::easy(),
            selected: None,
            history: MoveHistory::new(),
            status,
            solved_notified: status == BoardStatus::Complete,
            rng: PuzzleRng::new(0),
        }
    }
}
