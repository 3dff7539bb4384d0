//! Running score for a quiz session.

use std::fmt;

/// Correct-answer count against the session's question total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scorecard {
    correct: usize,
    answered: usize,
    total: usize,
}

impl Scorecard {
    /// Start an empty scorecard for a session of `total` questions.
    pub fn new(total: usize) -> Self {
        Self {
            correct: 0,
            answered: 0,
            total,
        }
    }

    /// Record the outcome of one question.
    pub fn record(&mut self, correct: bool) {
        self.answered += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Questions answered correctly.
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Questions scored so far, right or wrong.
    pub fn answered(&self) -> usize {
        self.answered
    }

    /// Questions in the session.
    pub fn total(&self) -> usize {
        self.total
    }

    /// `correct / total * 100`, or `None` for a session with no questions.
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.correct as f64 / self.total as f64 * 100.0)
    }
}

impl fmt::Display for Scorecard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percentage() {
            Some(pct) => write!(f, "score: {} / {} = {pct:.1}%", self.correct, self.total),
            None => write!(f, "score: 0 / 0 (no questions)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_score() {
        let mut card = Scorecard::new(2);
        card.record(true);
        card.record(true);
        assert_eq!(card.percentage(), Some(100.0));
        assert_eq!(card.to_string(), "score: 2 / 2 = 100.0%");
    }

    #[test]
    fn partial_score_rounds_for_display() {
        let mut card = Scorecard::new(3);
        card.record(true);
        card.record(false);
        card.record(false);
        assert_eq!(card.correct(), 1);
        assert_eq!(card.answered(), 3);
        assert_eq!(card.to_string(), "score: 1 / 3 = 33.3%");
    }

    #[test]
    fn unanswered_questions_still_count_in_total() {
        let mut card = Scorecard::new(4);
        card.record(true);
        assert_eq!(card.answered(), 1);
        assert_eq!(card.percentage(), Some(25.0));
    }

    #[test]
    fn empty_session_has_no_percentage() {
        let card = Scorecard::new(0);
        assert_eq!(card.percentage(), None);
        assert_eq!(card.to_string(), "score: 0 / 0 (no questions)");
    }
}
