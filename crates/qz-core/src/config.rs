//! Configuration for quiz sessions and the bank picker.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Default word that ends the picker loop.
pub const DEFAULT_EXIT_WORD: &str = "exit";

/// Default extension of question bank files.
pub const DEFAULT_EXTENSION: &str = "json";

/// Configuration for a quiz run.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// RNG seed for a reproducible presentation order. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Input that ends the picker loop, matched case-sensitively.
    pub exit_word: String,
    /// Extension (without the dot) of files offered by the picker.
    pub extension: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            seed: None,
            exit_word: DEFAULT_EXIT_WORD.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl QuizConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the picker's exit word.
    pub fn with_exit_word(mut self, word: impl Into<String>) -> Self {
        self.exit_word = word.into();
        self
    }

    /// Set the bank file extension. A leading dot is ignored.
    pub fn with_extension(mut self, ext: &str) -> Self {
        self.extension = ext.trim_start_matches('.').to_string();
        self
    }

    /// Build the RNG that drives presentation order.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config() {
        let cfg = QuizConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.exit_word, "exit");
        assert_eq!(cfg.extension, "json");
    }

    #[test]
    fn builder_methods() {
        let cfg = QuizConfig::default()
            .with_seed(9)
            .with_exit_word("quit")
            .with_extension(".quiz");
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.exit_word, "quit");
        assert_eq!(cfg.extension, "quiz");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = QuizConfig::default().with_seed(42);
        let a: u64 = cfg.rng().random();
        let b: u64 = cfg.rng().random();
        assert_eq!(a, b);
    }
}
