//! Riddle gate guarding the personal letter.
//!
//! One fixed question with a canonical answer and three ordered hints. The
//! answer check is deliberately loose: a guess that merely contains the
//! answer word also passes. That has shipped behavior since the first
//! version of the card and stays as-is.

pub const QUESTION: &str = "What gets lit on your birthday but isn't a lamp?";
pub const ANSWER: &str = "candles";
pub const HINTS: &[&str] = &[
    "They go on top of something sweet!",
    "You make a wish when you blow them out",
    "They help celebrate another year!",
];

/// Wrong guesses before the hint line appears.
const HINT_AFTER_ATTEMPTS: u32 = 2;

/// Per-visit riddle state. A fresh gate is created every time the game scene
/// is entered; attempts are never remembered across visits.
#[derive(Debug)]
pub struct RiddleGate {
    question: &'static str,
    answer: &'static str,
    hints: &'static [&'static str],
    attempts: u32,
    revealed_hint: usize,
    hint_visible: bool,
    solved: bool,
}

impl RiddleGate {
    pub fn new(
        question: &'static str,
        answer: &'static str,
        hints: &'static [&'static str],
    ) -> Self {
        Self {
            question,
            answer,
            hints,
            attempts: 0,
            revealed_hint: 0,
            hint_visible: false,
            solved: false,
        }
    }

    /// The shipped birthday riddle.
    pub fn birthday() -> Self {
        Self::new(QUESTION, ANSWER, HINTS)
    }

    pub fn question(&self) -> &str {
        self.question
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    /// The currently revealed hint, once enough wrong guesses have been made.
    pub fn hint(&self) -> Option<&str> {
        self.hint_visible.then(|| self.hints[self.revealed_hint])
    }

    /// Checks a free-text guess. Both sides are trimmed and lowercased; the
    /// guess passes on equality or on containing the canonical answer.
    ///
    /// A wrong guess bumps the attempt counter and, from the second wrong
    /// guess on, reveals the hint line and walks the hint index forward,
    /// capped at the last hint.
    pub fn submit_guess(&mut self, raw: &str) -> bool {
        let guess = raw.trim().to_lowercase();
        let answer = self.answer.trim().to_lowercase();
        if guess == answer || guess.contains(&answer) {
            self.solved = true;
            return true;
        }
        self.attempts += 1;
        if self.attempts >= HINT_AFTER_ATTEMPTS {
            self.hint_visible = true;
            self.revealed_hint = (self.revealed_hint + 1).min(self.hints.len() - 1);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_loose_matches_pass() {
        for guess in ["candles", "Candles ", "the candles are lit"] {
            let mut gate = RiddleGate::birthday();
            assert!(gate.submit_guess(guess), "guess {guess:?} should pass");
            assert!(gate.solved());
        }
    }

    #[test]
    fn wrong_guess_does_not_solve() {
        let mut gate = RiddleGate::birthday();
        assert!(!gate.submit_guess("cake"));
        assert!(!gate.solved());
        assert_eq!(gate.attempts(), 1);
    }

    #[test]
    fn solved_never_reverts() {
        let mut gate = RiddleGate::birthday();
        assert!(gate.submit_guess("candles"));
        assert!(!gate.submit_guess("cake"));
        assert!(gate.solved());
    }

    #[test]
    fn hint_appears_on_second_wrong_guess() {
        let mut gate = RiddleGate::birthday();
        gate.submit_guess("cake");
        assert_eq!(gate.hint(), None);
        gate.submit_guess("balloons");
        assert!(gate.hint().is_some());
    }

    #[test]
    fn hint_index_caps_at_last_hint() {
        let mut gate = RiddleGate::birthday();
        for _ in 0..10 {
            gate.submit_guess("nope");
        }
        assert_eq!(gate.hint(), Some(HINTS[HINTS.len() - 1]));
    }

    #[test]
    fn normalization_ignores_case_and_whitespace() {
        let mut gate = RiddleGate::birthday();
        assert!(gate.submit_guess("  CANDLES  "));
    }
}
