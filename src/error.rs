use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("invalid input: correct={correct}, total={total}")]
    InvalidInput { correct: i64, total: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("question {id} has {count} choices, expected 4")]
    ChoiceCount { id: String, count: usize },
    #[error("question {id} choice at position {position} has id {found}, expected {expected}")]
    ChoiceOrder {
        id: String,
        position: usize,
        expected: char,
        found: char,
    },
    #[error("question {id} correct answer {answer} is not one of A-D")]
    UnknownAnswer { id: String, answer: char },
}
