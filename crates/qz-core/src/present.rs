//! Randomized presentation order.
//!
//! Questions and, independently, each question's answers are shuffled with a
//! uniform Fisher-Yates shuffle drawn from the caller's RNG. The source bank is
//! never touched; only the order of whole [`Answer`](crate::bank::Answer)
//! values changes, so every text stays paired with its marker.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::bank::{Question, QuestionBank};

/// Produce a shuffled copy of the bank's questions, each with shuffled answers.
pub fn present<R: Rng + ?Sized>(bank: &QuestionBank, rng: &mut R) -> Vec<Question> {
    let mut questions = bank.questions().to_vec();
    questions.shuffle(rng);
    for question in &mut questions {
        question.answers.shuffle(rng);
    }
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::Answer;
    use crate::test_support::{arb_bank, sample_bank};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Order-independent view of a question: prompt plus sorted (text, correct) pairs.
    fn canonical(questions: &[Question]) -> Vec<(String, Vec<(String, bool)>)> {
        let mut out: Vec<_> = questions
            .iter()
            .map(|q| {
                let mut answers: Vec<_> = q
                    .answers
                    .iter()
                    .map(|a| (a.text.clone(), a.is_correct()))
                    .collect();
                answers.sort();
                (q.prompt.clone(), answers)
            })
            .collect();
        out.sort();
        out
    }

    #[test]
    fn same_seed_same_order() {
        let bank = sample_bank();
        let a = present(&bank, &mut StdRng::seed_from_u64(11));
        let b = present(&bank, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn bank_is_left_untouched() {
        let bank = sample_bank();
        let before = bank.clone();
        let _ = present(&bank, &mut StdRng::seed_from_u64(3));
        assert_eq!(bank, before);
    }

    #[test]
    fn correct_text_keeps_its_marker() {
        let bank = sample_bank();
        for seed in 0..32 {
            let shown = present(&bank, &mut StdRng::seed_from_u64(seed));
            let q = shown.iter().find(|q| q.prompt == "2+2?").unwrap();
            assert_eq!(q.correct_answer(), Some(&Answer::correct("4")));
        }
    }

    #[test]
    fn eventually_reorders_answers() {
        let bank = sample_bank();
        let stored = &bank.questions()[1];
        let moved = (0..64).any(|seed| {
            let shown = present(&bank, &mut StdRng::seed_from_u64(seed));
            let q = shown.iter().find(|q| q.prompt == stored.prompt).unwrap();
            q.answers != stored.answers
        });
        assert!(moved);
    }

    proptest! {
        #[test]
        fn presentation_is_a_permutation(bank in arb_bank(), seed in any::<u64>()) {
            let shown = present(&bank, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(shown.len(), bank.len());
            prop_assert_eq!(canonical(&shown), canonical(bank.questions()));
            for q in &shown {
                prop_assert_eq!(q.answers.iter().filter(|a| a.is_correct()).count(), 1);
            }
        }
    }
}
