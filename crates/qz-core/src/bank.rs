//! Question bank model and JSON loader.
//!
//! A bank file is a JSON object with a `questions` array. Each question has a
//! `question` prompt and an `answers` array of single-key objects, where the
//! key `"*"` marks the correct answer and any other key marks a wrong one.
//! Answer values may be strings, numbers, or booleans; numbers and booleans
//! are shown as their JSON text. `null`, arrays, and objects are rejected.
//!
//! ```json
//! { "questions": [
//!     { "question": "2+2?", "answers": [ { "*": "4" }, { "1": "5" } ] }
//! ] }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{QuizError, QuizResult};

/// Key that marks the correct answer in a bank file.
pub const CORRECT_KEY: &str = "*";

/// Whether an answer is the right one for its question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// The single right answer.
    Correct,
    /// Any other answer.
    Incorrect,
}

impl Marker {
    /// Decode a bank-file answer key.
    pub fn from_key(key: &str) -> Self {
        if key == CORRECT_KEY {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }
}

/// One answer choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// Display text.
    pub text: String,
    /// Correctness marker, bound to the text for the answer's lifetime.
    pub marker: Marker,
}

impl Answer {
    /// Create the correct answer.
    pub fn correct(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marker: Marker::Correct,
        }
    }

    /// Create a wrong answer.
    pub fn incorrect(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marker: Marker::Incorrect,
        }
    }

    /// Check whether this is the correct answer.
    pub fn is_correct(&self) -> bool {
        self.marker == Marker::Correct
    }
}

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The prompt shown to the user.
    pub prompt: String,
    /// Answer choices in stored order.
    pub answers: Vec<Answer>,
}

impl Question {
    /// Create a question. Invariants are checked when it joins a bank.
    pub fn new(prompt: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            prompt: prompt.into(),
            answers,
        }
    }

    /// The answer marked correct.
    ///
    /// Always `Some` for questions that came out of a [`QuestionBank`].
    pub fn correct_answer(&self) -> Option<&Answer> {
        self.answers.iter().find(|a| a.is_correct())
    }

    fn validate(&self, index: usize) -> QuizResult<()> {
        let invalid = |reason: String| QuizError::InvalidQuestion {
            index,
            prompt: self.prompt.clone(),
            reason,
        };

        if self.prompt.trim().is_empty() {
            return Err(invalid("prompt is empty".into()));
        }
        if self.answers.is_empty() {
            return Err(invalid("has no answers".into()));
        }
        match self.answers.iter().filter(|a| a.is_correct()).count() {
            1 => Ok(()),
            0 => Err(invalid("no answer is marked correct".into())),
            n => Err(invalid(format!("{n} answers are marked correct"))),
        }
    }
}

/// An ordered, validated collection of questions.
///
/// Every question in a bank has at least one answer and exactly one answer
/// marked [`Marker::Correct`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from questions, rejecting any that break the invariants.
    pub fn new(questions: Vec<Question>) -> QuizResult<Self> {
        for (index, question) in questions.iter().enumerate() {
            question.validate(index)?;
        }
        Ok(Self { questions })
    }

    /// Read and parse a bank file.
    pub fn load(path: &Path) -> QuizResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| QuizError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match Self::parse(&text, path) {
            Ok(bank) => {
                info!("loaded {} questions from {}", bank.len(), path.display());
                Ok(bank)
            }
            Err(e) => {
                warn!("rejected {}: {e}", path.display());
                Err(e)
            }
        }
    }

    /// Parse bank JSON. `origin` is only used in error messages.
    pub fn parse(text: &str, origin: &Path) -> QuizResult<Self> {
        let raw: RawBank = serde_json::from_str(text).map_err(|source| QuizError::Malformed {
            path: origin.to_path_buf(),
            source,
        })?;

        let raw_questions = match raw.questions {
            Some(qs) if !qs.is_empty() => qs,
            _ => {
                return Err(QuizError::MissingQuestions {
                    path: origin.to_path_buf(),
                });
            }
        };

        let questions = raw_questions
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_question(index))
            .collect::<QuizResult<Vec<_>>>()?;

        Self::new(questions)
    }

    /// The questions in stored order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Deserialize)]
struct RawBank {
    #[serde(default)]
    questions: Option<Vec<RawQuestion>>,
}

#[derive(Deserialize)]
struct RawQuestion {
    question: String,
    answers: Vec<BTreeMap<String, Value>>,
}

impl RawQuestion {
    fn into_question(self, index: usize) -> QuizResult<Question> {
        let mut answers = Vec::with_capacity(self.answers.len());
        for (i, entry) in self.answers.into_iter().enumerate() {
            if entry.len() != 1 {
                return Err(QuizError::InvalidQuestion {
                    index,
                    prompt: self.question,
                    reason: format!(
                        "answer {} has {} keys, expected exactly one",
                        i + 1,
                        entry.len()
                    ),
                });
            }
            if let Some((key, value)) = entry.into_iter().next() {
                let text = match value {
                    Value::String(text) => text,
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    other => {
                        return Err(QuizError::InvalidQuestion {
                            index,
                            prompt: self.question,
                            reason: format!(
                                "answer {} must be a string, number, or boolean, found {}",
                                i + 1,
                                json_kind(&other)
                            ),
                        });
                    }
                };
                answers.push(Answer {
                    text,
                    marker: Marker::from_key(&key),
                });
            }
        }
        Ok(Question::new(self.question, answers))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
