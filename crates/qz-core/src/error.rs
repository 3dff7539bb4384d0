//! Error types for loading question banks and reading selections.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for quiz operations.
pub type QuizResult<T> = Result<T, QuizError>;

/// Errors that stop a question bank from being loaded.
///
/// Any of these aborts the session attempt before it starts; the caller
/// reports it and returns to the picker.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The bank file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The bank file is not valid structured data.
    #[error("malformed question bank {}: {source}", .path.display())]
    Malformed {
        /// Path of the offending file.
        path: PathBuf,
        /// Parser diagnostic.
        #[source]
        source: serde_json::Error,
    },

    /// The `questions` key is absent, null, or empty.
    #[error("failed to load questions from {}", .path.display())]
    MissingQuestions {
        /// Path of the offending file.
        path: PathBuf,
    },

    /// A question breaks the bank invariants.
    #[error("question {} (\"{prompt}\"): {reason}", .index + 1)]
    InvalidQuestion {
        /// Position of the question in the bank (0-based).
        index: usize,
        /// The question's prompt text.
        prompt: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// A user selection that does not name one of the presented choices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The input is not an integer.
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// The integer is outside `0..len`.
    #[error("{index} is out of range (0-{})", .len.saturating_sub(1))]
    OutOfRange {
        /// The index that was entered.
        index: i64,
        /// Number of choices on offer.
        len: usize,
    },

    /// The integer is too large to be any index.
    #[error("{input} is out of range (0-{})", .len.saturating_sub(1))]
    Overflow {
        /// The digits that were entered.
        input: String,
        /// Number of choices on offer.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_questions_message() {
        let err = QuizError::MissingQuestions {
            path: PathBuf::from("bank.json"),
        };
        assert_eq!(err.to_string(), "failed to load questions from bank.json");
    }

    #[test]
    fn invalid_question_is_one_based() {
        let err = QuizError::InvalidQuestion {
            index: 0,
            prompt: "2+2?".into(),
            reason: "no answer is marked correct".into(),
        };
        assert_eq!(
            err.to_string(),
            "question 1 (\"2+2?\"): no answer is marked correct"
        );
    }

    #[test]
    fn out_of_range_message() {
        let err = SelectionError::OutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "7 is out of range (0-2)");
    }
}
