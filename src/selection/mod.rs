pub mod genre;
pub mod passage;
pub mod selector;
pub mod stats;
pub mod types;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub use genre::{detect_genre, resolve_genre};
pub use passage::{normalize_passage, passage_key, stable_hash, PassageKey};
pub use selector::select_questions_with_diversity;
pub use stats::{compute_selection_stats, SelectionStats};
pub use types::{
    AnswerChoice, Difficulty, DifficultyDistribution, Domain, Genre, Question, QuestionType,
    SelectionConfig,
};

/// 可复现的随机源，供测试和需要固定顺序的调用方使用
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
