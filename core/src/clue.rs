use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::RevealOutcome;

/// How far a clue has been uncovered. Only ever moves forward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }

    /// The state one reveal step later, `None` once the answer is showing.
    pub const fn successor(self) -> Option<Self> {
        match self {
            Self::Hidden => Some(Self::Question),
            Self::Question => Some(Self::Answer),
            Self::Answer => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    state: RevealState,
}

impl Clue {
    /// Text shown on a cell that has not been revealed yet.
    pub const PLACEHOLDER: &'static str = "?";

    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            state: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Advances the clue by exactly one step and reports what the cell should show now.
    pub fn reveal(&mut self) -> RevealOutcome {
        use RevealState::*;

        match self.state {
            Hidden => {
                self.state = Question;
                RevealOutcome::ShowQuestion
            }
            Question => {
                self.state = Answer;
                RevealOutcome::ShowAnswer
            }
            Answer => RevealOutcome::NoChange,
        }
    }

    pub fn display_text(&self) -> &str {
        match self.state {
            RevealState::Hidden => Self::PLACEHOLDER,
            RevealState::Question => &self.question,
            RevealState::Answer => &self.answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clue_starts_hidden_behind_placeholder() {
        let clue = Clue::new("2+2", "4");

        assert_eq!(clue.state(), RevealState::Hidden);
        assert_eq!(clue.display_text(), "?");
    }

    #[test]
    fn reveal_walks_question_then_answer_then_stops() {
        let mut clue = Clue::new("2+2", "4");

        assert_eq!(clue.reveal(), RevealOutcome::ShowQuestion);
        assert_eq!(clue.state(), RevealState::Question);
        assert_eq!(clue.display_text(), "2+2");

        assert_eq!(clue.reveal(), RevealOutcome::ShowAnswer);
        assert_eq!(clue.state(), RevealState::Answer);
        assert_eq!(clue.display_text(), "4");

        assert_eq!(clue.reveal(), RevealOutcome::NoChange);
        assert_eq!(clue.state(), RevealState::Answer);
        assert_eq!(clue.display_text(), "4");
    }

    #[test]
    fn repeated_reveals_never_leave_answer() {
        let mut clue = Clue::new("Hamlet author", "Shakespeare");
        for _ in 0..10 {
            clue.reveal();
        }

        assert_eq!(clue.state(), RevealState::Answer);
        assert!(!clue.reveal().has_update());
    }

    #[test]
    fn successor_only_moves_forward() {
        let mut state = RevealState::Hidden;
        while let Some(next) = state.successor() {
            assert!(next > state);
            state = next;
        }
        assert!(state.is_terminal());
    }
}
