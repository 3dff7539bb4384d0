//! Multiple-choice quiz engine.
//!
//! Loads question banks from JSON, shuffles questions and answers into a
//! presentation order, runs a session one question at a time, and keeps score.
//! The [`console`] and [`picker`] modules drive sessions over any line-based
//! reader and writer.

pub mod bank;
pub mod config;
pub mod console;
pub mod error;
pub mod picker;
pub mod present;
pub mod score;
pub mod session;

#[cfg(test)]
mod test_support;

pub use bank::{Answer, Marker, Question, QuestionBank};
pub use config::QuizConfig;
pub use console::{Console, run_session};
pub use error::{QuizError, QuizResult, SelectionError};
pub use picker::{Decision, run_picker};
pub use score::Scorecard;
pub use session::{Prompt, QuizSession, SessionState, Verdict};
