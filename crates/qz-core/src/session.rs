//! Quiz session state machine.
//!
//! A `QuizSession` walks a shuffled copy of a bank one question at a time:
//!
//! ```text
//! AwaitingQuestion --next_question--> AwaitingAnswer --answer--> AwaitingQuestion
//!        |                                                            |
//!        +---------------- no questions left ----------------> Complete
//! ```
//!
//! Presenting a question and scoring an answer happen inside `next_question`
//! and `answer`. The session does no I/O; callers render the returned
//! [`Prompt`] and [`Verdict`] however they like.

use std::fmt;
use std::num::{IntErrorKind, ParseIntError};

use log::{debug, info};
use rand::Rng;

use crate::bank::{Question, QuestionBank};
use crate::error::SelectionError;
use crate::present::present;
use crate::score::Scorecard;

/// Where the session is in its question loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ready to present the next question, if any remain.
    AwaitingQuestion,
    /// A question is on screen and needs an answer.
    AwaitingAnswer,
    /// Every question has been scored.
    Complete,
}

/// A question as presented to the user.
#[derive(Debug, Clone, Copy)]
pub struct Prompt<'a> {
    /// Position in the presentation order (1-based).
    pub number: usize,
    /// Number of questions in the session.
    pub total: usize,
    /// The question, answers already in presentation order.
    pub question: &'a Question,
}

impl fmt::Display for Prompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.question.prompt)?;
        for (i, answer) in self.question.answers.iter().enumerate() {
            write!(f, "\n{i} : {}", answer.text)?;
        }
        Ok(())
    }
}

/// Outcome of answering one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The selected answer was the correct one.
    Correct,
    /// A wrong answer was selected.
    Incorrect {
        /// Text of the answer that was correct.
        correct_answer: String,
    },
    /// The input did not select an answer. Scored as wrong.
    Invalid(SelectionError),
}

impl Verdict {
    /// Whether the question was scored as correct.
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Correct => write!(f, "correct"),
            Self::Incorrect { correct_answer } => {
                write!(f, "incorrect\ncorrect answer: {correct_answer}")
            }
            Self::Invalid(e) => write!(f, "error in response: {e}"),
        }
    }
}

/// Parse a 0-based choice among `len` options.
pub fn parse_selection(input: &str, len: usize) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let index: i64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => SelectionError::Overflow {
            input: trimmed.to_string(),
            len,
        },
        _ => SelectionError::NotANumber(trimmed.to_string()),
    })?;
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(SelectionError::OutOfRange { index, len })
}

/// One run through a question bank.
pub struct QuizSession {
    questions: Vec<Question>,
    position: usize,
    state: SessionState,
    score: Scorecard,
}

impl QuizSession {
    /// Start a session over a freshly shuffled view of `bank`.
    pub fn new<R: Rng + ?Sized>(bank: &QuestionBank, rng: &mut R) -> Self {
        let questions = present(bank, rng);
        let score = Scorecard::new(questions.len());
        Self {
            questions,
            position: 0,
            state: SessionState::AwaitingQuestion,
            score,
        }
    }

    /// Current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Running score.
    pub fn scorecard(&self) -> &Scorecard {
        &self.score
    }

    /// Questions not yet scored, including one awaiting an answer.
    pub fn remaining(&self) -> usize {
        self.questions.len() - self.position
    }

    /// Present the next question.
    ///
    /// Returns the pending question again if it has not been answered yet,
    /// and `None` once the session is complete.
    pub fn next_question(&mut self) -> Option<Prompt<'_>> {
        match self.state {
            SessionState::Complete => None,
            SessionState::AwaitingAnswer => Some(self.prompt()),
            SessionState::AwaitingQuestion if self.position >= self.questions.len() => {
                self.complete();
                None
            }
            SessionState::AwaitingQuestion => {
                self.state = SessionState::AwaitingAnswer;
                Some(self.prompt())
            }
        }
    }

    /// Score the pending question against raw user input.
    ///
    /// Input that is not a valid index is scored as wrong and reported as
    /// [`Verdict::Invalid`]. Returns `None` when no question is pending.
    pub fn answer(&mut self, input: &str) -> Option<Verdict> {
        if self.state != SessionState::AwaitingAnswer {
            return None;
        }
        let question = &self.questions[self.position];

        let verdict = match parse_selection(input, question.answers.len()) {
            Ok(i) if question.answers[i].is_correct() => Verdict::Correct,
            Ok(_) => Verdict::Incorrect {
                correct_answer: question
                    .correct_answer()
                    .map(|a| a.text.clone())
                    .unwrap_or_default(),
            },
            Err(e) => {
                debug!("invalid selection {input:?}: {e}");
                Verdict::Invalid(e)
            }
        };
        debug!(
            "question {}/{} scored {}",
            self.position + 1,
            self.questions.len(),
            if verdict.is_correct() { "correct" } else { "wrong" }
        );

        self.score.record(verdict.is_correct());
        self.position += 1;
        self.state = SessionState::AwaitingQuestion;
        Some(verdict)
    }

    /// End the session, leaving any unanswered questions scored as wrong.
    pub fn finish(mut self) -> Scorecard {
        if self.state != SessionState::Complete {
            self.complete();
        }
        self.score
    }

    fn prompt(&self) -> Prompt<'_> {
        Prompt {
            number: self.position + 1,
            total: self.questions.len(),
            question: &self.questions[self.position],
        }
    }

    fn complete(&mut self) {
        self.state = SessionState::Complete;
        info!(
            "session complete: {} / {} correct ({} answered)",
            self.score.correct(),
            self.score.total(),
            self.score.answered()
        );
    }
}
