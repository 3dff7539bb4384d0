//! Fixtures shared by the unit tests.

use proptest::prelude::*;
use proptest::sample::Index;

use crate::bank::{Answer, Question, QuestionBank};

/// The two-question bank used across scenario tests.
pub fn sample_bank() -> QuestionBank {
    QuestionBank::new(vec![
        Question::new("2+2?", vec![Answer::correct("4"), Answer::incorrect("5")]),
        Question::new(
            "Capital of France?",
            vec![
                Answer::incorrect("Lyon"),
                Answer::incorrect("Nice"),
                Answer::correct("Paris"),
                Answer::incorrect("Lille"),
            ],
        ),
    ])
    .unwrap()
}

/// A single question with one to five answers, exactly one of them correct.
pub fn arb_question() -> impl Strategy<Value = Question> {
    (
        "[A-Za-z][A-Za-z ?]{0,15}",
        prop::collection::vec("[a-z0-9]{0,6}", 1..6),
        any::<Index>(),
    )
        .prop_map(|(prompt, texts, pick)| {
            let correct = pick.index(texts.len());
            let answers = texts
                .into_iter()
                .enumerate()
                .map(|(i, text)| {
                    if i == correct {
                        Answer::correct(text)
                    } else {
                        Answer::incorrect(text)
                    }
                })
                .collect();
            Question::new(prompt, answers)
        })
}

/// A valid bank with one to eight questions.
pub fn arb_bank() -> impl Strategy<Value = QuestionBank> {
    prop::collection::vec(arb_question(), 1..8)
        .prop_map(|questions| QuestionBank::new(questions).unwrap())
}
