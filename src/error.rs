//! Error taxonomy for the engine.
//!
//! Every fallible operation reports through one of three enums: move
//! rejections, undo refusals, and generation failures. All of them are
//! values returned to the caller; a failed operation never leaves the
//! board partially mutated.

/// Why a move was rejected.
///
/// The board is unchanged whenever one of these is returned. The reason is
/// surfaced to the presentation layer, which clears any pending selection
/// regardless of which reason it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("source and destination are the same stack")]
    SameStack,

    #[error("no stack at index {0}")]
    NoSuchStack(usize),

    #[error("source stack is empty")]
    EmptySource,

    #[error("group does not fit in the destination stack")]
    CapacityExceeded,

    #[error("destination top is a different kind")]
    KindMismatch,
}

/// Why an undo was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UndoError {
    #[error("no moves to undo")]
    NoHistory,

    #[error("puzzle is already complete")]
    AlreadyComplete,
}

/// Why board generation failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The profile or kind selection cannot describe a well-formed board.
    /// Fatal to this attempt; the caller must supply valid input.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Every generation attempt produced a board that failed post-validation.
    /// Retries are bounded, so this surfaces instead of looping forever.
    #[error("generated board failed validation after {attempts} attempts")]
    InvariantViolation { attempts: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::KindMismatch.to_string(),
            "destination top is a different kind"
        );
        assert_eq!(MoveError::NoSuchStack(7).to_string(), "no stack at index 7");
    }

    #[test]
    fn test_undo_error_display() {
        assert_eq!(UndoError::NoHistory.to_string(), "no moves to undo");
    }

    #[test]
    fn test_generate_error_display() {
        let err = GenerateError::InvalidConfiguration("profile requires at least one kind".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: profile requires at least one kind"
        );

        let err = GenerateError::InvariantViolation { attempts: 8 };
        assert_eq!(
            err.to_string(),
            "generated board failed validation after 8 attempts"
        );
    }
}
